//! Output formatting for command results.
//!
//! Each result type renders as plain text for terminals or as pretty JSON
//! for scripts. Writers take any [`Write`] so rendering can be tested
//! without capturing stdout.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use wayfinder_lib::{PositionSummary, RouteStep, RouteSummary};

use crate::commands::info::BuildingOverview;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn render_route(self, summary: &RouteSummary) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            OutputFormat::Text => write_route_text(&mut out, summary)?,
            OutputFormat::Json => write_json(&mut out, summary)?,
        }
        Ok(())
    }

    pub fn render_position(self, summary: &PositionSummary) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            OutputFormat::Text => write_position_text(&mut out, summary)?,
            OutputFormat::Json => write_json(&mut out, summary)?,
        }
        Ok(())
    }

    pub fn render_overview(self, overview: &BuildingOverview) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            OutputFormat::Text => write_overview_text(&mut out, overview)?,
            OutputFormat::Json => write_json(&mut out, overview)?,
        }
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render a route summary in text format.
pub fn write_route_text<W: Write>(out: &mut W, summary: &RouteSummary) -> io::Result<()> {
    if summary.hops == 0 {
        return writeln!(
            out,
            "Already at {} (floor {}).",
            summary.goal.label, summary.goal.floor
        );
    }

    writeln!(
        out,
        "Route from {} to {} in {} ({} hops, cost {:.1}):",
        summary.start.label, summary.goal.label, summary.building, summary.hops, summary.total_cost
    )?;
    for step in &summary.steps {
        write_route_step(out, step)?;
    }
    if summary.floor_changes() > 0 {
        let floors = summary
            .floors
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        writeln!(out, "Floors: {}", floors)?;
    }
    Ok(())
}

fn write_route_step<W: Write>(out: &mut W, step: &RouteStep) -> io::Result<()> {
    match step.cost {
        Some(cost) => writeln!(
            out,
            "  {}. {} (floor {}, +{:.1})",
            step.index + 1,
            step.label,
            step.floor,
            cost
        ),
        None => writeln!(out, "  {}. {} (floor {})", step.index + 1, step.label, step.floor),
    }
}

/// Render a position estimate in text format.
pub fn write_position_text<W: Write>(out: &mut W, summary: &PositionSummary) -> io::Result<()> {
    let floor = summary.estimate.floor();
    writeln!(
        out,
        "Estimated position {} on floor {}",
        summary.estimate, floor
    )?;
    match (&summary.closest, summary.distance) {
        (Some(node), Some(distance)) => writeln!(
            out,
            "Closest node: {} (id {}, {:.1} away)",
            node.label, node.id, distance
        ),
        _ => writeln!(out, "No mapped nodes on floor {}", floor),
    }
}

/// Render a building overview in text format.
pub fn write_overview_text<W: Write>(out: &mut W, overview: &BuildingOverview) -> io::Result<()> {
    writeln!(out, "{} (#{})", overview.name, overview.id)?;
    if !overview.address.is_empty() {
        writeln!(out, "Address: {}", overview.address)?;
    }
    if let Some(image) = &overview.image {
        writeln!(out, "Image: {}", image)?;
    }
    writeln!(out, "Nodes: {}, edges: {}", overview.nodes, overview.edges)?;
    writeln!(out, "Floors: {}", join(&overview.floors))?;

    writeln!(out, "Rooms:")?;
    for room in &overview.rooms {
        writeln!(out, "  - {} (id {}, floor {})", room.name, room.id, room.floor)?;
    }

    writeln!(out, "Connectors:")?;
    for connector in &overview.connectors {
        write!(
            out,
            "  - {} serving floors {}",
            connector.label,
            join(&connector.serves)
        )?;
        if connector.operational {
            writeln!(out)?;
        } else {
            writeln!(out, " (out of service)")?;
        }
    }
    Ok(())
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
