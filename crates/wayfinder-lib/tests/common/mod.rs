#![allow(dead_code)]

use std::path::PathBuf;

use wayfinder_lib::{load_building, Link, Map, MapInfo, Node, NodeId, Point};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("science_hall.json")
}

/// The three-floor Science Hall fixture.
pub fn science_hall() -> Map {
    load_building(&fixture_path()).expect("fixture building loads")
}

pub fn link(from: &Node, to: &Node, weight: f64) -> Link {
    Link::new(from.clone(), to.clone(), weight).expect("valid link")
}

/// Link two nodes with a weight equal to their straight-line distance plus `extra`.
pub fn measured_link(from: &Node, to: &Node, extra: f64) -> Link {
    let weight = from.point.distance_to(&to.point) + extra;
    link(from, to, weight)
}

pub fn waypoint(id: NodeId, x: i32, floor: i32, z: i32) -> Node {
    Node::waypoint(id, Point::new(x, floor, z))
}

pub fn room(id: NodeId, name: &str, x: i32, floor: i32, z: i32) -> Node {
    Node::room(id, Point::new(x, floor, z), name)
}

pub fn map_of(links: impl IntoIterator<Item = Link>) -> Map {
    Map::new(
        MapInfo {
            id: 1,
            name: "Test Building".to_string(),
            ..MapInfo::default()
        },
        links,
    )
}
