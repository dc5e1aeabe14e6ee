use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Edge, NodeId};

/// Ordered sequence of edges leading from a start node to a goal node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    start: NodeId,
    goal: NodeId,
    edges: Vec<Edge>,
}

impl Path {
    /// A path that stays at `node`.
    pub fn empty(node: NodeId) -> Self {
        Self {
            start: node,
            goal: node,
            edges: Vec::new(),
        }
    }

    /// Build a path from `start` by following `edges` in order.
    ///
    /// Fails when an edge does not touch the node reached so far.
    pub fn from_edges(start: NodeId, edges: Vec<Edge>) -> Result<Self> {
        let mut current = start;
        for edge in &edges {
            current = edge.other(current).ok_or_else(|| {
                let [a, b] = edge.nodes();
                Error::invalid_argument(format!(
                    "edge {a}-{b} does not continue a path at node {current}"
                ))
            })?;
        }
        Ok(Self {
            start,
            goal: current,
            edges,
        })
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn goal(&self) -> NodeId {
        self.goal
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of edge weights along the path.
    pub fn cost(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Node identifiers visited in order, including start and goal.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        let mut current = self.start;
        nodes.push(current);
        for edge in &self.edges {
            if let Some(next) = edge.other(current) {
                current = next;
                nodes.push(current);
            }
        }
        nodes
    }

    /// Concatenate `other` onto the end of this path.
    ///
    /// `other` must begin where this path ends.
    pub fn append(mut self, other: Path) -> Result<Path> {
        if self.goal != other.start {
            return Err(Error::invalid_argument(format!(
                "cannot append a path starting at node {} to a path ending at node {}",
                other.start, self.goal
            )));
        }
        self.edges.extend(other.edges);
        self.goal = other.goal;
        Ok(self)
    }
}
