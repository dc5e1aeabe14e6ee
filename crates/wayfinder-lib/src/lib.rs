//! Wayfinder library entry points.
//!
//! This crate holds the indoor wayfinding core: the building graph model,
//! A*-based route planning across floors, and beacon-based position
//! estimation. Higher-level consumers (the CLI, app shells) build or load a
//! [`Map`], then call [`plan_route`] and [`estimate_position`] instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod document;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod positioning;
pub mod routing;
pub mod search;

pub use document::{load_building, resolve_building_path, BuildingDocument, EdgeRecord};
pub use error::{Error, Result};
pub use geometry::Point;
pub use graph::{ConnectorKind, Edge, FloorConnector, Link, Node, NodeId, NodeKind, Room};
pub use map::{ImageHandle, Map, MapInfo};
pub use output::{PositionSummary, RouteEndpoint, RouteStep, RouteSummary};
pub use path::Path;
pub use positioning::{estimate_position, triangulate, Beacon};
pub use routing::{navigate, plan_route, RouteRequest};
pub use search::find_path_a_star;
