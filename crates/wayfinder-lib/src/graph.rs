use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Caller-assigned identifier for a node in a building graph.
pub type NodeId = i64;

/// Means of travelling between floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    Elevator,
    Staircase,
    Escalator,
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ConnectorKind::Elevator => "elevator",
            ConnectorKind::Staircase => "staircase",
            ConnectorKind::Escalator => "escalator",
        };
        f.write_str(value)
    }
}

/// A named destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// An elevator, staircase, or escalator landing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorConnector {
    pub connector: ConnectorKind,
    pub floors: BTreeSet<i32>,
    /// Out-of-service connectors are never selected for routing.
    #[serde(default = "default_operational")]
    pub operational: bool,
}

fn default_operational() -> bool {
    true
}

impl FloorConnector {
    /// Whether the connector stops at `floor`.
    pub fn services(&self, floor: i32) -> bool {
        self.floors.contains(&floor)
    }
}

/// Variant data carried by a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// Structural junction with no extra data.
    Waypoint,
    Room(Room),
    FloorConnector(FloorConnector),
}

/// A location in the building graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub point: Point,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn waypoint(id: NodeId, point: Point) -> Self {
        Self {
            id,
            point,
            kind: NodeKind::Waypoint,
        }
    }

    pub fn room(id: NodeId, point: Point, name: impl Into<String>) -> Self {
        Self {
            id,
            point,
            kind: NodeKind::Room(Room {
                name: name.into(),
                keywords: Vec::new(),
            }),
        }
    }

    pub fn floor_connector(
        id: NodeId,
        point: Point,
        connector: ConnectorKind,
        floors: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            id,
            point,
            kind: NodeKind::FloorConnector(FloorConnector {
                connector,
                floors: floors.into_iter().collect(),
                operational: true,
            }),
        }
    }

    /// Floor index of the node, taken from the y coordinate of its point.
    pub fn floor(&self) -> i32 {
        self.point.floor()
    }

    pub fn as_room(&self) -> Option<&Room> {
        match &self.kind {
            NodeKind::Room(room) => Some(room),
            _ => None,
        }
    }

    pub fn as_floor_connector(&self) -> Option<&FloorConnector> {
        match &self.kind {
            NodeKind::FloorConnector(connector) => Some(connector),
            _ => None,
        }
    }

    pub fn is_room(&self) -> bool {
        matches!(self.kind, NodeKind::Room(_))
    }

    /// Human-readable label used in diagnostics and route summaries.
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Room(room) => room.name.clone(),
            NodeKind::FloorConnector(connector) => {
                format!("{} #{}", connector.connector, self.id)
            }
            NodeKind::Waypoint => format!("node #{}", self.id),
        }
    }

    /// Short classification of the node variant.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Waypoint => "waypoint",
            NodeKind::Room(_) => "room",
            NodeKind::FloorConnector(connector) => match connector.connector {
                ConnectorKind::Elevator => "elevator",
                ConnectorKind::Staircase => "staircase",
                ConnectorKind::Escalator => "escalator",
            },
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Weighted undirected connection between two distinct nodes.
///
/// Equality and hashing consider only the unordered node pair, so two edges
/// joining the same nodes are the same edge whatever their weights.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    nodes: [NodeId; 2],
    weight: f64,
}

impl Edge {
    /// Create an edge, rejecting self-loops and negative or non-finite weights.
    pub fn new(a: NodeId, b: NodeId, weight: f64) -> Result<Self> {
        if a == b {
            return Err(Error::invalid_argument(format!(
                "edge endpoints must be distinct (node {a})"
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::invalid_argument(format!(
                "edge weight between {a} and {b} must be a non-negative number, got {weight}"
            )));
        }
        Ok(Self {
            nodes: [a, b],
            weight,
        })
    }

    pub fn nodes(&self) -> [NodeId; 2] {
        self.nodes
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.nodes[0] == a && self.nodes[1] == b) || (self.nodes[0] == b && self.nodes[1] == a)
    }

    /// The endpoint opposite `node`, or `None` when the edge does not touch it.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.nodes[0] == node {
            Some(self.nodes[1])
        } else if self.nodes[1] == node {
            Some(self.nodes[0])
        } else {
            None
        }
    }

    /// Order edges by ascending weight.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }

    fn sorted_pair(&self) -> (NodeId, NodeId) {
        let [a, b] = self.nodes;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_pair() == other.sorted_pair()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_pair().hash(state);
    }
}

/// Edge description carrying full endpoint data, used to build and grow a map.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: Node,
    pub to: Node,
    pub weight: f64,
}

impl Link {
    /// Create a link, applying the same validation as [`Edge::new`].
    pub fn new(from: Node, to: Node, weight: f64) -> Result<Self> {
        Edge::new(from.id, to.id, weight)?;
        Ok(Self { from, to, weight })
    }

    /// The edge this link inserts into a map.
    pub fn edge(&self) -> Edge {
        Edge {
            nodes: [self.from.id, self.to.id],
            weight: self.weight,
        }
    }
}
