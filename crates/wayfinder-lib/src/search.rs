//! A* search over a building [`Map`].
//!
//! The heuristic is the straight-line distance between a node and the goal.
//! It never overestimates as long as every edge weight is at least the
//! Euclidean distance between its endpoints, which is the contract for
//! authored building data.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::{Node, NodeId};
use crate::map::Map;
use crate::path::Path;

/// Find the lowest-cost path from `start` to `goal`.
///
/// Returns `Ok(None)` when the frontier is exhausted without reaching the
/// goal, and an empty path when `start == goal`. Fails with
/// [`Error::UnknownNode`] when either endpoint is missing from the map.
pub fn find_path_a_star(map: &Map, start: NodeId, goal: NodeId) -> Result<Option<Path>> {
    let start_node = map.node(start).ok_or(Error::UnknownNode { id: start })?;
    let goal_node = map.node(goal).ok_or(Error::UnknownNode { id: goal })?;

    if start == goal {
        return Ok(Some(Path::empty(start)));
    }

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    g_score.insert(start, 0.0);
    open.push(AStarEntry::new(
        start,
        0.0,
        heuristic(start_node, goal_node),
        sequence,
    ));

    while let Some(entry) = open.pop() {
        if closed.contains(&entry.node) {
            continue;
        }
        let current_score = match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return reconstruct_path(map, &came_from, start, goal).map(Some);
        }

        closed.insert(entry.node);

        for edge in map.edges_of(entry.node) {
            let Some(next) = edge.other(entry.node) else {
                continue;
            };
            if closed.contains(&next) {
                continue;
            }

            let tentative_g = current_score + edge.weight();
            if tentative_g >= *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                continue;
            }

            came_from.insert(next, entry.node);
            g_score.insert(next, tentative_g);
            let estimate = map
                .node(next)
                .map(|node| heuristic(node, goal_node))
                .unwrap_or(0.0);
            sequence += 1;
            open.push(AStarEntry::new(next, tentative_g, estimate, sequence));
        }
    }

    Ok(None)
}

fn heuristic(node: &Node, goal: &Node) -> f64 {
    node.point.distance_to(&goal.point)
}

/// Walk the predecessor table back from `goal` and look up each connecting edge.
fn reconstruct_path(
    map: &Map,
    came_from: &HashMap<NodeId, NodeId>,
    start: NodeId,
    goal: NodeId,
) -> Result<Path> {
    let mut nodes = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&previous) = came_from.get(&current) else {
            break;
        };
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();

    let mut edges = Vec::with_capacity(nodes.len().saturating_sub(1));
    for pair in nodes.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(edge) = map.edge_between(from, to) else {
            warn!(from, to, "predecessor chain references a missing edge");
            return Err(Error::InternalInconsistency { from, to });
        };
        edges.push(*edge);
    }

    Path::from_edges(start, edges)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
    sequence: u64,
}

impl AStarEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
            sequence,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest estimate; ties go to the
        // entry discovered first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
