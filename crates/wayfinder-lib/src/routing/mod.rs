//! Route planning between a user's position and a destination room.
//!
//! This module provides:
//! - [`RouteRequest`] - start node, destination room, and connector preference
//! - [`plan_route`] - main entry point returning the travelled [`Path`]
//! - [`navigate`] - shorthand for a request without a connector preference
//!
//! Same-floor requests run a single A* search. Cross-floor requests pick the
//! nearest operational floor connector that stops at the goal floor, then
//! stitch two searches together through it: start to connector, connector
//! to goal. Routes spanning more than two floors in one call are not
//! attempted; callers chain requests themselves.
//!
//! # Example
//!
//! ```ignore
//! use wayfinder_lib::{load_building, plan_route, ConnectorKind, RouteRequest};
//!
//! let map = load_building("science_hall.json".as_ref())?;
//! let goal = map.resolve_room("Lab 201")?;
//! let request = RouteRequest::new(1, goal).prefer(ConnectorKind::Elevator);
//! let path = plan_route(&map, &request)?;
//! println!("{} hops, cost {:.1}", path.hop_count(), path.cost());
//! ```

mod connectors;

pub use connectors::qualifying_connectors;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{ConnectorKind, Node, NodeId};
use crate::map::Map;
use crate::path::Path;
use crate::search::find_path_a_star;

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    /// Node closest to the user's current position.
    pub start: NodeId,
    /// Destination; must be a room.
    pub goal: NodeId,
    /// Preferred means of changing floors. `None` accepts any kind.
    pub connector: Option<ConnectorKind>,
}

impl RouteRequest {
    pub fn new(start: NodeId, goal: NodeId) -> Self {
        Self {
            start,
            goal,
            connector: None,
        }
    }

    /// Restrict floor changes to connectors of `kind`.
    pub fn prefer(mut self, kind: ConnectorKind) -> Self {
        self.connector = Some(kind);
        self
    }
}

/// Plan a route without a connector preference.
pub fn navigate(map: &Map, start: NodeId, goal: NodeId) -> Result<Path> {
    plan_route(map, &RouteRequest::new(start, goal))
}

/// Compute the shortest route for `request`.
///
/// Fails with [`Error::NoValidPath`] when the goal cannot be reached, with
/// [`Error::UnknownNode`] for identifiers missing from the map, and with
/// [`Error::InvalidArgument`] when the goal is not a room.
pub fn plan_route(map: &Map, request: &RouteRequest) -> Result<Path> {
    let start = map
        .node(request.start)
        .ok_or(Error::UnknownNode { id: request.start })?;
    let goal = map
        .node(request.goal)
        .ok_or(Error::UnknownNode { id: request.goal })?;

    if !goal.is_room() {
        return Err(Error::invalid_argument(format!(
            "destination {} is not a room",
            goal.label()
        )));
    }

    if start.floor() == goal.floor() {
        return find_path_a_star(map, start.id, goal.id)?
            .ok_or_else(|| no_valid_path(start, goal));
    }

    let candidates = qualifying_connectors(map, start, goal.floor(), request.connector);
    debug!(
        start = start.id,
        goal = goal.id,
        candidates = candidates.len(),
        preference = ?request.connector,
        "ranked floor connectors"
    );
    let Some(connector) = candidates.first() else {
        return Err(no_valid_path(start, goal));
    };
    debug!(connector = connector.id, "selected floor connector");

    let to_connector =
        find_path_a_star(map, start.id, connector.id)?.ok_or_else(|| no_valid_path(start, goal))?;
    let to_goal =
        find_path_a_star(map, connector.id, goal.id)?.ok_or_else(|| no_valid_path(start, goal))?;
    debug!(
        first_leg = to_connector.cost(),
        second_leg = to_goal.cost(),
        "stitched cross-floor route"
    );

    to_connector.append(to_goal)
}

fn no_valid_path(start: &Node, goal: &Node) -> Error {
    Error::NoValidPath {
        start: start.label(),
        goal: goal.label(),
    }
}
