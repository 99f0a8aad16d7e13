use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airnet_cli::commands::airport::{
    handle_airport_add, handle_airport_list, handle_airport_remove, handle_airport_update,
};
use airnet_cli::commands::diagram::{handle_diagram_command, DiagramCommandArgs};
use airnet_cli::commands::flight::{
    handle_flight_add, handle_flight_list, handle_flight_remove, FlightArgs,
};
use airnet_cli::commands::route::{handle_route_command, RouteCommandArgs};
use airnet_cli::output::OutputFormat;
use airnet_lib::{resolve_database_path, AirportUpdate, Location, SizeClass};

#[derive(Parser, Debug)]
#[command(author, version, about = "AirNet flight network utilities")]
struct Cli {
    /// Override the network database path (defaults to $AIRNET_DATABASE, then
    /// the platform data directory).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage airports.
    #[command(subcommand)]
    Airport(AirportCommand),
    /// Manage flights.
    #[command(subcommand)]
    Flight(FlightCommand),
    /// Compute the cheapest route between two airports.
    Route(RouteArgs),
    /// Export the network as a Graphviz DOT diagram.
    Diagram(DiagramArgs),
}

#[derive(Subcommand, Debug)]
enum AirportCommand {
    /// Add an airport.
    Add {
        /// Three-character airport id.
        #[arg(long)]
        id: String,
        /// Location as `X,Y`.
        #[arg(long, allow_hyphen_values = true)]
        location: Location,
        /// Size class (L, M or S).
        #[arg(long)]
        class: SizeClass,
    },
    /// Remove an airport and every flight touching it.
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Change an airport's location and/or size class.
    #[command(group(
        ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["location", "class"])
    ))]
    Update {
        #[arg(long)]
        id: String,
        /// New location as `X,Y`.
        #[arg(long, allow_hyphen_values = true)]
        location: Option<Location>,
        /// New size class (L, M or S).
        #[arg(long)]
        class: Option<SizeClass>,
    },
    /// List airports.
    List,
}

#[derive(Subcommand, Debug)]
enum FlightCommand {
    /// Add a flight.
    Add(FlightOptions),
    /// Remove a flight.
    Remove(FlightOptions),
    /// List flights with their costs.
    List,
}

#[derive(Args, Debug)]
struct FlightOptions {
    /// Origin airport id.
    #[arg(long = "from")]
    from: String,
    /// Destination airport id.
    #[arg(long = "to")]
    to: String,
    /// Aircraft size class (L, M or S).
    #[arg(long)]
    aircraft: SizeClass,
}

impl From<FlightOptions> for FlightArgs {
    fn from(options: FlightOptions) -> Self {
        Self {
            from: options.from,
            to: options.to,
            aircraft: options.aircraft,
        }
    }
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Origin airport id.
    #[arg(long = "from")]
    from: String,
    /// Destination airport id.
    #[arg(long = "to")]
    to: String,
    /// Airport the route must stop at.
    #[arg(long)]
    via: Option<String>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            via: args.via,
        }
    }
}

#[derive(Args, Debug)]
struct DiagramArgs {
    /// File to write the DOT diagram to.
    #[arg(long, short = 'o')]
    output: PathBuf,
    /// Highlight the route starting here.
    #[arg(long = "from", requires = "to")]
    from: Option<String>,
    /// Highlight the route ending here.
    #[arg(long = "to", requires = "from")]
    to: Option<String>,
    /// Stop for the highlighted route.
    #[arg(long, requires = "from")]
    via: Option<String>,
}

impl From<DiagramArgs> for DiagramCommandArgs {
    fn from(args: DiagramArgs) -> Self {
        let route = match (args.from, args.to) {
            (Some(from), Some(to)) => Some(RouteCommandArgs {
                from,
                to,
                via: args.via,
            }),
            _ => None,
        };
        Self {
            output: args.output,
            route,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let db_path = resolve_database_path(cli.db.as_deref())
        .context("failed to resolve the network database location")?;
    run(&db_path, cli.format, cli.command)
}

fn run(db_path: &Path, format: OutputFormat, command: Command) -> Result<()> {
    match command {
        Command::Airport(AirportCommand::Add {
            id,
            location,
            class,
        }) => handle_airport_add(db_path, format, &id, location, class),
        Command::Airport(AirportCommand::Remove { id }) => {
            handle_airport_remove(db_path, format, &id)
        }
        Command::Airport(AirportCommand::Update {
            id,
            location,
            class,
        }) => handle_airport_update(db_path, format, &id, AirportUpdate { location, class }),
        Command::Airport(AirportCommand::List) => handle_airport_list(db_path, format),
        Command::Flight(FlightCommand::Add(options)) => {
            handle_flight_add(db_path, format, &options.into())
        }
        Command::Flight(FlightCommand::Remove(options)) => {
            handle_flight_remove(db_path, format, &options.into())
        }
        Command::Flight(FlightCommand::List) => handle_flight_list(db_path, format),
        Command::Route(args) => handle_route_command(db_path, format, &args.into()),
        Command::Diagram(args) => handle_diagram_command(db_path, format, &args.into()),
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
