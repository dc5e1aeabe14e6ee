//! Building documents: the JSON form in which map loaders hand a building to
//! the core.
//!
//! A document lists every node once and refers to nodes from edges by id:
//!
//! ```json
//! {
//!   "id": 7,
//!   "name": "Science Hall",
//!   "address": "1 College Rd",
//!   "image": "maps/science-hall.png",
//!   "nodes": [
//!     { "id": 1, "point": { "x": 0, "y": 1, "z": 0 }, "kind": "waypoint" },
//!     { "id": 2, "point": { "x": 4, "y": 1, "z": 0 }, "kind": "room", "name": "Lab 101" }
//!   ],
//!   "edges": [ { "from": 1, "to": 2, "weight": 4.0 } ]
//! }
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{Link, Node, NodeId};
use crate::map::{ImageHandle, Map, MapInfo};

/// Environment variable naming the building document when no path is given.
pub const BUILDING_ENV: &str = "WAYFINDER_BUILDING";

/// Edge entry of a building document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Serialized building as produced by an external map loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingDocument {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image: Option<ImageHandle>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// `None` when the document carries `"edges": null` or omits the field.
    #[serde(default)]
    pub edges: Option<Vec<Option<EdgeRecord>>>,
}

impl BuildingDocument {
    /// Decode a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the [`Map`] described by this document.
    ///
    /// A missing edge list and duplicate node ids fail with
    /// [`Error::InvalidArgument`]; edges naming an undeclared node fail with
    /// [`Error::UnknownNode`]. Null edge entries and repeated node pairs are
    /// skipped. Declared nodes that no edge touches are left out of the map.
    pub fn into_map(self) -> Result<Map> {
        let Some(records) = self.edges else {
            return Err(Error::invalid_argument(format!(
                "building {} has no edge collection",
                self.id
            )));
        };

        let mut declared: HashMap<NodeId, Node> = HashMap::with_capacity(self.nodes.len());
        for node in self.nodes {
            let id = node.id;
            if declared.insert(id, node).is_some() {
                return Err(Error::invalid_argument(format!(
                    "node {id} is declared more than once"
                )));
            }
        }

        let info = MapInfo {
            id: self.id,
            name: self.name,
            address: self.address,
            image: self.image,
        };
        let mut map = Map::new(info, std::iter::empty());

        let mut skipped = 0usize;
        for record in records {
            let Some(record) = record else {
                skipped += 1;
                continue;
            };
            let from = declared
                .get(&record.from)
                .cloned()
                .ok_or(Error::UnknownNode { id: record.from })?;
            let to = declared
                .get(&record.to)
                .cloned()
                .ok_or(Error::UnknownNode { id: record.to })?;
            if !map.add_edge(Link::new(from, to, record.weight)?) {
                skipped += 1;
            }
        }

        let orphans = declared
            .keys()
            .filter(|id| !map.contains_node(**id))
            .count();
        if orphans > 0 {
            warn!(
                building = map.id(),
                orphans, "dropping nodes that no edge references"
            );
        }
        debug!(
            building = map.id(),
            nodes = map.node_count(),
            edges = map.edge_count(),
            skipped,
            "building document converted"
        );

        Ok(map)
    }
}

/// Read and convert the building document at `path`.
pub fn load_building(path: &Path) -> Result<Map> {
    let text = fs::read_to_string(path)?;
    let map = BuildingDocument::from_json(&text)?.into_map()?;
    info!(
        building = %map.name(),
        nodes = map.node_count(),
        edges = map.edge_count(),
        "loaded building from {}",
        path.display()
    );
    Ok(map)
}

/// Resolve the building document location.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `WAYFINDER_BUILDING` environment variable.
///
/// The resolved path must exist.
pub fn resolve_building_path(target: Option<&Path>) -> Result<PathBuf> {
    let path = match target {
        Some(explicit) => explicit.to_path_buf(),
        None => env::var_os(BUILDING_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or(Error::BuildingNotConfigured)?,
    };

    if !path.exists() {
        return Err(Error::BuildingNotFound { path });
    }
    Ok(path)
}
