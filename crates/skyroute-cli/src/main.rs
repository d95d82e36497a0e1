use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::network::NetworkOptions;
use skyroute_cli::output::OutputFormat;
use skyroute_lib::{RouteAlgorithm, Weights};

mod commands;

use commands::airports::handle_airports_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-objective flight route planner")]
struct Cli {
    /// Directory holding airports.csv and routes.csv (overrides SKYROUTE_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for the weather draws, for reproducible routes.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the weather pass and use the published route costs.
    #[arg(long, global = true)]
    calm: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the best route between two airports.
    Route(RouteArgs),
    /// List the airports in the loaded dataset.
    Airports,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Source airport name or id.
    #[arg(long = "from")]
    from: String,
    /// Destination airport name or id.
    #[arg(long = "to")]
    to: String,
    /// Weight applied to total distance (km).
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    distance_weight: f64,
    /// Weight applied to total flight duration (minutes).
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    duration_weight: f64,
    /// Weight applied to total fuel (litres).
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    fuel_weight: f64,
    /// Weight applied to total congestion.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    congestion_weight: f64,
    /// Route search strategy.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Exhaustive)]
    algorithm: AlgorithmArg,
    /// Stop the search after this many node expansions.
    #[arg(long)]
    max_expansions: Option<u64>,
    /// Only consider routes with at most this many legs (exhaustive only).
    #[arg(long)]
    max_hops: Option<usize>,
    /// Give up once the search has run for this many milliseconds.
    #[arg(long)]
    max_duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Exhaustive,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Exhaustive => RouteAlgorithm::Exhaustive,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

impl RouteArgs {
    fn to_command_args(&self) -> RouteCommandArgs {
        RouteCommandArgs {
            from: self.from.clone(),
            to: self.to.clone(),
            weights: Weights::new(
                self.distance_weight,
                self.duration_weight,
                self.fuel_weight,
                self.congestion_weight,
            ),
            algorithm: self.algorithm.into(),
            max_expansions: self.max_expansions,
            max_hops: self.max_hops,
            max_duration: self.max_duration_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = NetworkOptions {
        data_dir: cli.data_dir.clone(),
        seed: cli.seed,
        calm: cli.calm,
    };

    match &cli.command {
        Command::Route(args) => handle_route_command(&network, cli.format, &args.to_command_args()),
        Command::Airports => handle_airports_command(&network, cli.format),
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
