use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::info::handle_info_command;
use wayfinder_cli::commands::locate::handle_locate_command;
use wayfinder_cli::commands::route::{handle_route_command, ConnectorArg, RouteCommandArgs};
use wayfinder_cli::output::OutputFormat;
use wayfinder_lib::Beacon;

#[derive(Parser, Debug)]
#[command(author, version, about = "Indoor wayfinding utilities")]
struct Cli {
    /// Path to the building document. Falls back to WAYFINDER_BUILDING.
    #[arg(long, global = true)]
    building: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route to a room, starting from a node, a room, or beacon readings.
    Route {
        /// Destination room name.
        #[arg(long = "to")]
        to: String,
        /// Starting node id or room name.
        #[arg(long = "from", conflicts_with = "beacons")]
        from: Option<String>,
        /// Beacon reading used to estimate the start (repeat up to three times).
        #[arg(long = "beacon", value_name = "X,Y,Z@LEVEL", allow_hyphen_values = true)]
        beacons: Vec<Beacon>,
        /// Only change floors using this kind of connector.
        #[arg(long, value_enum)]
        connector: Option<ConnectorArg>,
    },
    /// Estimate the current position from beacon readings.
    Locate {
        /// Beacon reading (repeat up to three times).
        #[arg(
            long = "beacon",
            value_name = "X,Y,Z@LEVEL",
            required = true,
            allow_hyphen_values = true
        )]
        beacons: Vec<Beacon>,
    },
    /// Summarise the loaded building.
    Info,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let building = cli.building.as_deref();

    match cli.command {
        Command::Route {
            to,
            from,
            beacons,
            connector,
        } => {
            let args = RouteCommandArgs {
                to,
                from,
                beacons,
                connector,
            };
            handle_route_command(building, cli.format, &args)
        }
        Command::Locate { beacons } => handle_locate_command(building, cli.format, &beacons),
        Command::Info => handle_info_command(building, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
