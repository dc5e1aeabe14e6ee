use serde::Serialize;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graph::{Node, NodeId};
use crate::map::Map;
use crate::path::Path;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub label: String,
    pub floor: i32,
}

impl RouteEndpoint {
    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id,
            label: node.label(),
            floor: node.floor(),
        }
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub label: String,
    pub kind: &'static str,
    pub floor: i32,
    /// Weight of the edge used to reach this step; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub building: String,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub hops: usize,
    pub total_cost: f64,
    /// Floors in the order they are visited, without repeats of consecutive floors.
    pub floors: Vec<i32>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Path`] into a summary with resolved node labels.
    pub fn from_path(map: &Map, path: &Path) -> Result<Self> {
        let lookup = |id: NodeId| map.node(id).ok_or(Error::UnknownNode { id });

        let start = lookup(path.start())?;
        let goal = lookup(path.goal())?;

        let mut steps = Vec::with_capacity(path.hop_count() + 1);
        let mut floors: Vec<i32> = Vec::new();
        let costs = std::iter::once(None).chain(path.edges().iter().map(|e| Some(e.weight())));
        for (index, (id, cost)) in path.nodes().into_iter().zip(costs).enumerate() {
            let node = lookup(id)?;
            if floors.last() != Some(&node.floor()) {
                floors.push(node.floor());
            }
            steps.push(RouteStep {
                index,
                id,
                label: node.label(),
                kind: node.kind_name(),
                floor: node.floor(),
                cost,
            });
        }

        Ok(Self {
            building: map.name().to_string(),
            start: RouteEndpoint::from_node(start),
            goal: RouteEndpoint::from_node(goal),
            hops: path.hop_count(),
            total_cost: path.cost(),
            floors,
            steps,
        })
    }

    /// Number of times the route changes floor.
    pub fn floor_changes(&self) -> usize {
        self.floors.len().saturating_sub(1)
    }
}

/// Triangulated position and the node it maps to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionSummary {
    pub estimate: Point,
    /// Closest node on the estimate's floor, if any.
    pub closest: Option<RouteEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl PositionSummary {
    /// Map an estimated point onto the closest node of `map`.
    pub fn locate(map: &Map, estimate: Point) -> Result<Self> {
        let closest = map.closest_node(&estimate)?;
        Ok(Self {
            estimate,
            closest: closest.map(RouteEndpoint::from_node),
            distance: closest.map(|node| node.point.distance_to(&estimate)),
        })
    }
}
