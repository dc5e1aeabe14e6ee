//! Floor connector selection for cross-floor routes.

use crate::graph::{ConnectorKind, Node};
use crate::map::Map;

/// Operational connectors that stop at `goal_floor`, nearest to `start` first.
///
/// When `preference` is set only connectors of that kind are considered.
/// Every qualifying connector is collected before ranking; distance ties keep
/// map insertion order.
pub fn qualifying_connectors<'a>(
    map: &'a Map,
    start: &Node,
    goal_floor: i32,
    preference: Option<ConnectorKind>,
) -> Vec<&'a Node> {
    let mut candidates: Vec<(&Node, f64)> = map
        .floor_connectors()
        .filter(|node| {
            node.as_floor_connector().is_some_and(|connector| {
                connector.operational
                    && connector.services(goal_floor)
                    && preference.map_or(true, |kind| connector.connector == kind)
            })
        })
        .map(|node| (node, node.point.distance_to(&start.point)))
        .collect();

    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.into_iter().map(|(node, _)| node).collect()
}
