use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use taxi_core::synthetic::SyntheticParkParams;

mod commands;
mod logging;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "taxi-park",
    about = "Queries and reports over a taxi park dataset",
    long_about = "Run driver/passenger queries over a taxi park stored as JSON,\n\
                  build aggregate reports, generate synthetic parks,\n\
                  and export trip tables to Parquet."
)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "TAXI_PARK_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full report (all queries) for a park
    Report {
        /// Park JSON file
        #[arg(long)]
        input: PathBuf,
        /// Query config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the faithful-passenger minimum from the config
        #[arg(long)]
        min_trips: Option<usize>,
        /// Output file; the JSON report goes to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(value_enum, long, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
    /// Run a single query and print its result as JSON
    Query {
        /// Park JSON file
        #[arg(long)]
        input: PathBuf,
        #[arg(value_enum)]
        kind: QueryKind,
        /// Minimum trip count for the faithful query; defaults to the config value
        #[arg(long)]
        min_trips: Option<usize>,
        /// Driver name for the frequent query
        #[arg(long)]
        driver: Option<String>,
        /// Query config JSON file (period width, pareto thresholds)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Generate a synthetic park and write it as JSON
    Generate {
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 50)]
        drivers: u32,
        #[arg(long, default_value_t = 200)]
        passengers: u32,
        #[arg(long, default_value_t = 1_000)]
        trips: usize,
        /// Fraction of drivers that get trips
        #[arg(long, default_value_t = 0.9)]
        active_share: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Export a park's trips to Parquet
    ExportTrips {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Full report as JSON
    Json,
    /// Driver income breakdown as CSV
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum QueryKind {
    /// Drivers without trips
    FakeDrivers,
    /// Passengers with at least --min-trips trips
    Faithful,
    /// Passengers who rode with --driver more than once
    Frequent,
    /// Passengers with mostly discounted trips
    Smart,
    /// Most frequent trip duration period
    Period,
    /// Whether 20% of drivers earn 80% of income
    Pareto,
}

// ── main ───────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Report {
            input,
            config,
            min_trips,
            output,
            format,
        } => commands::report(
            &input,
            config.as_deref(),
            min_trips,
            output.as_deref(),
            format,
        ),
        Commands::Query {
            input,
            kind,
            min_trips,
            driver,
            config,
        } => commands::query(
            &input,
            kind,
            min_trips,
            driver.as_deref(),
            config.as_deref(),
        ),
        Commands::Generate {
            output,
            drivers,
            passengers,
            trips,
            active_share,
            seed,
        } => {
            let params = SyntheticParkParams::default()
                .with_drivers(drivers)
                .with_passengers(passengers)
                .with_trips(trips)
                .with_active_driver_share(active_share)
                .with_seed(seed);
            commands::generate(&params, &output)
        }
        Commands::ExportTrips { input, output } => commands::export_trips(&input, &output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
