//! Route command handler for planning a path to a destination room.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use tracing::debug;

use wayfinder_lib::{
    plan_route, Beacon, ConnectorKind, Error as RouteError, Map, NodeId, RouteRequest,
    RouteSummary,
};

use crate::commands::{estimate_from_beacons, load_map};
use crate::output::OutputFormat;

/// Floor connector kinds accepted by `--connector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectorArg {
    Elevator,
    Staircase,
    Escalator,
}

impl From<ConnectorArg> for ConnectorKind {
    fn from(value: ConnectorArg) -> Self {
        match value {
            ConnectorArg::Elevator => ConnectorKind::Elevator,
            ConnectorArg::Staircase => ConnectorKind::Staircase,
            ConnectorArg::Escalator => ConnectorKind::Escalator,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Destination room name.
    pub to: String,
    /// Starting node id or room name.
    pub from: Option<String>,
    /// Beacon readings used to estimate the start when `from` is absent.
    pub beacons: Vec<Beacon>,
    /// Preferred means of changing floors.
    pub connector: Option<ConnectorArg>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self, map: &Map) -> Result<RouteRequest> {
        let goal = map
            .resolve_room(&self.to)
            .map_err(|err| self.describe_failure(err))?;
        let start = self.resolve_start(map)?;

        let request = RouteRequest::new(start, goal);
        Ok(match self.connector {
            Some(kind) => request.prefer(kind.into()),
            None => request,
        })
    }

    /// Starting node: an explicit id or room name, else the node closest to
    /// the beacon estimate.
    fn resolve_start(&self, map: &Map) -> Result<NodeId> {
        if let Some(from) = self.from.as_deref() {
            if let Ok(id) = from.parse::<NodeId>() {
                return match map.node(id) {
                    Some(_) => Ok(id),
                    None => Err(RouteError::UnknownNode { id }.into()),
                };
            }
            return map.resolve_room(from).map_err(|err| self.describe_failure(err));
        }

        if self.beacons.is_empty() {
            bail!("a starting point is required; pass --from or at least one --beacon");
        }

        let estimate = estimate_from_beacons(&self.beacons)?;
        let closest = map
            .closest_node(&estimate)
            .context("failed to map the estimated position onto the building")?
            .ok_or_else(|| {
                anyhow!(
                    "No mapped nodes on floor {} near the estimated position {}.",
                    estimate.floor(),
                    estimate
                )
            })?;
        debug!(%estimate, start = closest.id, "resolved start from beacons");
        Ok(closest.id)
    }

    fn describe_failure(&self, err: RouteError) -> anyhow::Error {
        match err {
            RouteError::UnknownRoom { name, suggestions } => {
                anyhow!(format_unknown_room_message(&name, &suggestions))
            }
            RouteError::NoValidPath { start, goal } => {
                anyhow!(format_no_route_message(&start, &goal, self.connector))
            }
            other => anyhow::Error::new(other),
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    building: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let map = load_map(building)?;
    let request = args.to_request(&map)?;

    let path = plan_route(&map, &request).map_err(|err| args.describe_failure(err))?;
    let summary = RouteSummary::from_path(&map, &path)
        .context("failed to build route summary for display")?;

    format.render_route(&summary)
}

fn format_unknown_room_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown room '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_no_route_message(start: &str, goal: &str, connector: Option<ConnectorArg>) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    match connector {
        Some(_) => message.push_str(" Try another --connector or omit it to use any connector."),
        None => message.push_str(" The destination may not be connected to the rest of the building."),
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use wayfinder_lib::{load_building, Point};

    fn science_hall() -> Map {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../docs/fixtures/science_hall.json");
        load_building(&path).expect("fixture loads")
    }

    fn args(to: &str) -> RouteCommandArgs {
        RouteCommandArgs {
            to: to.to_string(),
            from: None,
            beacons: Vec::new(),
            connector: None,
        }
    }

    #[test]
    fn start_accepts_ids_and_room_names() {
        let map = science_hall();
        let by_id = RouteCommandArgs {
            from: Some("4".to_string()),
            ..args("Lab 102")
        };
        assert_eq!(by_id.to_request(&map).unwrap(), RouteRequest::new(4, 5));

        let by_name = RouteCommandArgs {
            from: Some("Lab 101".to_string()),
            connector: Some(ConnectorArg::Staircase),
            ..args("Lab 201")
        };
        assert_eq!(
            by_name.to_request(&map).unwrap(),
            RouteRequest::new(4, 22).prefer(ConnectorKind::Staircase)
        );
    }

    #[test]
    fn start_falls_back_to_beacons() {
        let map = science_hall();
        let located = RouteCommandArgs {
            beacons: vec![
                Beacon::new(Point::new(0, 1, 0), 10),
                Beacon::new(Point::new(20, 1, 0), 10),
            ],
            ..args("Lab 102")
        };
        assert_eq!(located.to_request(&map).unwrap().start, 2);

        let err = args("Lab 102").to_request(&map).unwrap_err();
        assert!(err.to_string().contains("starting point is required"));
    }

    #[test]
    fn unknown_ids_and_rooms_are_reported() {
        let map = science_hall();
        let missing = RouteCommandArgs {
            from: Some("404".to_string()),
            ..args("Lab 102")
        };
        assert!(missing.to_request(&map).unwrap_err().to_string().contains("404"));

        let typo = args("Lab 2O1").to_request(&map).unwrap_err().to_string();
        assert!(typo.starts_with("Unknown room 'Lab 2O1'."));
        assert!(typo.contains("Lab 201"));
    }

    #[test]
    fn no_route_message_mentions_connector_hint() {
        let with = format_no_route_message("node #1", "Seminar 220", Some(ConnectorArg::Escalator));
        assert_eq!(
            with,
            "No route found between node #1 and Seminar 220. Try another --connector or omit it to use any connector."
        );
        let without = format_no_route_message("node #1", "Storage B1", None);
        assert!(without.ends_with("connected to the rest of the building."));
    }

    #[test]
    fn unknown_room_message_lists_suggestions() {
        assert_eq!(format_unknown_room_message("Atrium", &[]), "Unknown room 'Atrium'.");
        assert_eq!(
            format_unknown_room_message("Lab 1O1", &["Lab 101".to_string()]),
            "Unknown room 'Lab 1O1'. Did you mean 'Lab 101'?"
        );
        assert_eq!(
            format_unknown_room_message(
                "Lab",
                &["Lab 101".to_string(), "Lab 102".to_string()]
            ),
            "Unknown room 'Lab'. Did you mean one of: 'Lab 101', 'Lab 102'?"
        );
    }
}
