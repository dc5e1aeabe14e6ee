//! Building map: the de-duplicated edge set and the nodes those edges imply.
//!
//! A [`Map`] keeps three invariants through every mutation:
//!
//! 1. the node set is exactly the union of all edge endpoints,
//! 2. no two edges join the same unordered node pair,
//! 3. removing the last edge touching a node removes that node.
//!
//! Nodes and edges are kept in insertion order. Incident edges are cached per
//! node and sorted by ascending weight; the planner relies on that order when
//! expanding neighbours.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graph::{ConnectorKind, Edge, Link, Node, NodeId};

/// Minimum Jaro-Winkler similarity for a room name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Opaque reference to a rendering asset for the map (file path, URL, cache key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(pub String);

/// Descriptive metadata for a building map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapInfo {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub image: Option<ImageHandle>,
}

/// Weighted graph of one building.
#[derive(Debug, Clone, Default)]
pub struct Map {
    info: MapInfo,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
    /// Index into `nodes` by id.
    positions: HashMap<NodeId, usize>,
}

impl Map {
    /// Build a map from links, skipping any whose node pair is already present.
    pub fn new(info: MapInfo, links: impl IntoIterator<Item = Link>) -> Self {
        let mut map = Self {
            info,
            ..Self::default()
        };
        for link in links {
            map.add_edge(link);
        }
        map
    }

    pub fn id(&self) -> i64 {
        self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn address(&self) -> &str {
        &self.info.address
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.info.image.as_ref()
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.positions.get(&id).and_then(|&index| self.nodes.get(index))
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        let [a, b] = edge.nodes();
        self.edge_between(a, b).is_some()
    }

    /// Rooms only.
    pub fn rooms(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|node| node.is_room())
    }

    /// Elevators, staircases, and escalators.
    pub fn floor_connectors(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.as_floor_connector().is_some())
    }

    /// Floor connectors of a single kind.
    pub fn floor_connectors_of(&self, kind: ConnectorKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| {
            node.as_floor_connector()
                .is_some_and(|connector| connector.connector == kind)
        })
    }

    /// Every edge touching `node`, sorted by ascending weight.
    ///
    /// Edges of equal weight keep their insertion order.
    pub fn edges_of(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The edge joining `a` and `b`, if one exists.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges_of(a).iter().find(|edge| edge.connects(a, b))
    }

    /// Insert an edge and any endpoint not yet in the map.
    ///
    /// Returns `false` without changing the map when an edge with the same
    /// node pair already exists. An endpoint whose id is already present keeps
    /// the stored node data.
    pub fn add_edge(&mut self, link: Link) -> bool {
        let edge = link.edge();
        if self.contains_edge(&edge) {
            debug!(
                from = link.from.id,
                to = link.to.id,
                "skipping duplicate edge"
            );
            return false;
        }

        for node in [link.from, link.to] {
            if !self.contains_node(node.id) {
                self.adjacency.insert(node.id, Vec::new());
                self.positions.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }

        for endpoint in edge.nodes() {
            if let Some(incident) = self.adjacency.get_mut(&endpoint) {
                incident.push(edge);
                incident.sort_by(Edge::cmp_weight);
            }
        }
        self.edges.push(edge);
        true
    }

    /// Remove an edge, dropping endpoints left without any incident edge.
    ///
    /// Returns `false` when the map holds no edge with the same node pair.
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        let Some(position) = self.edges.iter().position(|existing| existing == edge) else {
            return false;
        };
        let removed = self.edges.remove(position);

        let mut orphans = false;
        for endpoint in removed.nodes() {
            let orphaned = match self.adjacency.get_mut(&endpoint) {
                Some(incident) => {
                    incident.retain(|existing| existing != &removed);
                    incident.is_empty()
                }
                None => false,
            };
            if orphaned {
                self.adjacency.remove(&endpoint);
                self.nodes.retain(|node| node.id != endpoint);
                orphans = true;
            }
        }
        if orphans {
            self.positions = self
                .nodes
                .iter()
                .enumerate()
                .map(|(index, node)| (node.id, index))
                .collect();
        }
        true
    }

    /// Closest node to `point` on the same floor (matching y coordinate).
    ///
    /// Fails with [`Error::EmptyMap`] when the map has no nodes at all and
    /// returns `Ok(None)` when no node shares the floor of `point`. Ties keep
    /// the earliest node in insertion order.
    pub fn closest_node(&self, point: &Point) -> Result<Option<&Node>> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyMap);
        }

        let mut closest: Option<(&Node, f64)> = None;
        for node in self.nodes.iter().filter(|n| n.floor() == point.floor()) {
            let distance = point.distance_to(&node.point);
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((node, distance));
            }
        }
        Ok(closest.map(|(node, _)| node))
    }

    /// Look up a room by its exact, case-sensitive name.
    pub fn room_by_name(&self, name: &str) -> Option<&Node> {
        self.rooms()
            .find(|node| node.as_room().is_some_and(|room| room.name == name))
    }

    /// Resolve a room name to its node id, suggesting similar names on failure.
    pub fn resolve_room(&self, name: &str) -> Result<NodeId> {
        self.room_by_name(name)
            .map(|node| node.id)
            .ok_or_else(|| Error::UnknownRoom {
                name: name.to_string(),
                suggestions: self.room_suggestions(name, 3),
            })
    }

    /// Room names similar to `name`, best match first.
    pub fn room_suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .rooms()
            .filter_map(|node| node.as_room())
            .map(|room| {
                let score = strsim::jaro_winkler(&needle, &room.name.to_lowercase());
                (score, room.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(from: Node, to: Node, weight: f64) -> Link {
        Link::new(from, to, weight).expect("valid link")
    }

    fn corridor() -> Map {
        let a = Node::waypoint(1, Point::new(0, 1, 0));
        let b = Node::waypoint(2, Point::new(4, 1, 0));
        let c = Node::room(3, Point::new(4, 1, 3), "Lab 101");
        Map::new(
            MapInfo {
                id: 1,
                name: "Corridor".to_string(),
                ..MapInfo::default()
            },
            [
                link(a.clone(), b.clone(), 4.0),
                link(b.clone(), c.clone(), 3.0),
                link(a, c, 6.0),
            ],
        )
    }

    #[test]
    fn incident_edges_are_sorted_by_weight() {
        let map = corridor();
        let weights: Vec<f64> = map.edges_of(1).iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![4.0, 6.0]);
        let weights: Vec<f64> = map.edges_of(3).iter().map(Edge::weight).collect();
        assert_eq!(weights, vec![3.0, 6.0]);
        assert!(map.edges_of(99).is_empty());
    }

    #[test]
    fn duplicate_pairs_are_ignored() {
        let mut map = corridor();
        let again = link(
            Node::room(3, Point::new(4, 1, 3), "Lab 101"),
            Node::waypoint(2, Point::new(4, 1, 0)),
            1.0,
        );
        assert!(!map.add_edge(again));
        assert_eq!(map.edge_count(), 3);
        assert_eq!(map.edge_between(2, 3).map(Edge::weight), Some(3.0));
    }

    #[test]
    fn remove_edge_drops_orphaned_nodes() {
        let mut map = corridor();
        let edge = Edge::new(3, 2, 0.0).unwrap();
        assert!(map.remove_edge(&edge));
        assert_eq!(map.node_count(), 3, "every node still has an edge");

        let edge = Edge::new(1, 3, 0.0).unwrap();
        assert!(map.remove_edge(&edge));
        assert!(map.node(3).is_none());
        assert!(!map.contains_node(3));
        assert_eq!(map.node_count(), 2);
        assert!(!map.remove_edge(&edge), "second removal is a no-op");
    }

    #[test]
    fn node_lookup_survives_removing_the_first_node() {
        let mut map = corridor();
        assert!(map.remove_edge(&Edge::new(1, 2, 0.0).unwrap()));
        assert!(map.remove_edge(&Edge::new(3, 1, 0.0).unwrap()));
        assert!(map.node(1).is_none());
        assert_eq!(map.node(2).map(|node| node.point), Some(Point::new(4, 1, 0)));
        assert_eq!(map.node(3).map(|node| node.point), Some(Point::new(4, 1, 3)));

        let returning = Node::waypoint(1, Point::new(0, 1, 0));
        let c = Node::room(3, Point::new(4, 1, 3), "Lab 101");
        assert!(map.add_edge(link(returning, c, 6.0)));
        assert_eq!(map.node(1).map(|node| node.point), Some(Point::new(0, 1, 0)));
        assert_eq!(map.nodes().last().map(|node| node.id), Some(1));
    }

    #[test]
    fn contains_edge_ignores_direction_and_weight() {
        let map = corridor();
        assert!(map.contains_edge(&Edge::new(1, 2, 0.0).unwrap()));
        assert!(map.contains_edge(&Edge::new(2, 1, 9.0).unwrap()));
        assert!(!map.contains_edge(&Edge::new(1, 4, 1.0).unwrap()));
    }

    #[test]
    fn closest_node_stays_on_floor() {
        let map = corridor();
        let found = map.closest_node(&Point::new(5, 1, 4)).unwrap();
        assert_eq!(found.map(|node| node.id), Some(3));

        let other_floor = map.closest_node(&Point::new(4, 2, 3)).unwrap();
        assert!(other_floor.is_none());

        let empty = Map::default();
        assert!(matches!(
            empty.closest_node(&Point::new(0, 0, 0)),
            Err(Error::EmptyMap)
        ));
    }

    #[test]
    fn room_resolution_suggests_close_names() {
        let map = corridor();
        assert_eq!(map.resolve_room("Lab 101").unwrap(), 3);

        let error = map.resolve_room("Lab 10").unwrap_err();
        match error {
            Error::UnknownRoom { suggestions, .. } => {
                assert_eq!(suggestions, vec!["Lab 101".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(map.room_suggestions("Gymnasium", 3).is_empty());
    }
}
