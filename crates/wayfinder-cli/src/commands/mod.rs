// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches to one handler per subcommand.
// Shared building and beacon plumbing lives here.

pub mod info;
pub mod locate;
pub mod route;

use std::path::Path;

use anyhow::{bail, Context, Result};

use wayfinder_lib::{load_building, resolve_building_path, triangulate, Beacon, Map, Point};

/// Readings beyond the third are not used by triangulation.
const MAX_BEACONS: usize = 3;

/// Resolve and load the building document.
pub(crate) fn load_map(building: Option<&Path>) -> Result<Map> {
    let path =
        resolve_building_path(building).context("failed to locate the building document")?;
    load_building(&path)
        .with_context(|| format!("failed to load building from {}", path.display()))
}

/// Triangulate the user's position from one to three beacon readings.
pub(crate) fn estimate_from_beacons(beacons: &[Beacon]) -> Result<Point> {
    if beacons.len() > MAX_BEACONS {
        bail!(
            "at most {MAX_BEACONS} --beacon readings are supported, got {}",
            beacons.len()
        );
    }
    triangulate(beacons).context("failed to estimate position from beacon readings")
}
