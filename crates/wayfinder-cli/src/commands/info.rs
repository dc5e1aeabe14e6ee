//! Info command handler summarising the loaded building.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use wayfinder_lib::{Map, NodeId};

use crate::commands::load_map;
use crate::output::OutputFormat;

/// Serializable overview of a building document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildingOverview {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub nodes: usize,
    pub edges: usize,
    pub floors: Vec<i32>,
    pub rooms: Vec<RoomEntry>,
    pub connectors: Vec<ConnectorEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoomEntry {
    pub id: NodeId,
    pub name: String,
    pub floor: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectorEntry {
    pub id: NodeId,
    pub label: String,
    pub floor: i32,
    pub serves: Vec<i32>,
    pub operational: bool,
}

impl BuildingOverview {
    pub fn from_map(map: &Map) -> Self {
        let floors: BTreeSet<i32> = map.nodes().map(|node| node.floor()).collect();

        let rooms = map
            .rooms()
            .filter_map(|node| {
                node.as_room().map(|room| RoomEntry {
                    id: node.id,
                    name: room.name.clone(),
                    floor: node.floor(),
                })
            })
            .collect();

        let connectors = map
            .floor_connectors()
            .filter_map(|node| {
                node.as_floor_connector().map(|connector| ConnectorEntry {
                    id: node.id,
                    label: node.label(),
                    floor: node.floor(),
                    serves: connector.floors.iter().copied().collect(),
                    operational: connector.operational,
                })
            })
            .collect();

        Self {
            id: map.id(),
            name: map.name().to_string(),
            address: map.address().to_string(),
            image: map.image().map(|image| image.0.clone()),
            nodes: map.node_count(),
            edges: map.edge_count(),
            floors: floors.into_iter().collect(),
            rooms,
            connectors,
        }
    }
}

/// Handle the info subcommand.
pub fn handle_info_command(building: Option<&Path>, format: OutputFormat) -> Result<()> {
    let map = load_map(building)?;
    format.render_overview(&BuildingOverview::from_map(&map))
}
