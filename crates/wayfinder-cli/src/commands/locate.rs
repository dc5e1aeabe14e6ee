//! Locate command handler for beacon-based position estimates.

use std::path::Path;

use anyhow::{Context, Result};

use wayfinder_lib::{Beacon, PositionSummary};

use crate::commands::{estimate_from_beacons, load_map};
use crate::output::OutputFormat;

/// Handle the locate subcommand.
///
/// Triangulates the readings and reports the closest node on the estimate's floor.
pub fn handle_locate_command(
    building: Option<&Path>,
    format: OutputFormat,
    beacons: &[Beacon],
) -> Result<()> {
    let map = load_map(building)?;
    let estimate = estimate_from_beacons(beacons)?;
    let summary = PositionSummary::locate(&map, estimate)
        .context("failed to map the estimated position onto the building")?;
    format.render_position(&summary)
}
