use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use taxi_core::dataset::{load_park_json, save_park_json};
use taxi_core::export::{export_driver_income_csv, export_report_json, export_trips_parquet};
use taxi_core::synthetic::{generate_park, SyntheticParkParams};
use taxi_core::{build_report, Driver, QueryConfig, TaxiPark};
use tracing::info;

use crate::{QueryKind, ReportFormat};

fn load_park(input: &Path) -> Result<TaxiPark> {
    load_park_json(input).with_context(|| format!("failed to load park from {}", input.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<QueryConfig> {
    let Some(path) = path else {
        return Ok(QueryConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    QueryConfig::from_json_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))
}

/// `--min-trips` wins over the configured faithful-passenger minimum.
pub fn faithful_min_trips(flag: Option<usize>, config: &QueryConfig) -> usize {
    flag.unwrap_or(config.faithful_min_trips)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn report(
    input: &Path,
    config: Option<&Path>,
    min_trips: Option<usize>,
    output: Option<&Path>,
    format: ReportFormat,
) -> Result<()> {
    let config = load_config(config)?;
    let config = config.with_faithful_min_trips(faithful_min_trips(min_trips, &config));
    let park = load_park(input)?;
    let report = build_report(&park, &config);

    match (output, format) {
        (None, ReportFormat::Json) => print_json(&report),
        (None, ReportFormat::Csv) => bail!("--format csv requires --output"),
        (Some(path), ReportFormat::Json) => export_report_json(&report, path)
            .with_context(|| format!("failed to write report to {}", path.display())),
        (Some(path), ReportFormat::Csv) => export_driver_income_csv(&report, path)
            .with_context(|| format!("failed to write driver income to {}", path.display())),
    }
}

pub fn query(
    input: &Path,
    kind: QueryKind,
    min_trips: Option<usize>,
    driver: Option<&str>,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let park = load_park(input)?;

    match kind {
        QueryKind::FakeDrivers => print_json(&park.find_fake_drivers()),
        QueryKind::Faithful => print_json(
            &park.find_faithful_passengers(faithful_min_trips(min_trips, &config)),
        ),
        QueryKind::Frequent => {
            let Some(name) = driver else {
                bail!("the frequent query requires --driver");
            };
            print_json(&park.find_frequent_passengers(&Driver::new(name)))
        }
        QueryKind::Smart => print_json(&park.find_smart_passengers()),
        QueryKind::Period => print_json(
            &park
                .most_frequent_trip_duration_period_with(config.period_width_minutes)
                .map(|range| [*range.start(), *range.end()]),
        ),
        QueryKind::Pareto => print_json(&park.check_pareto_principle_with(&config.pareto)),
    }
}

pub fn generate(params: &SyntheticParkParams, output: &Path) -> Result<()> {
    let park = generate_park(params);
    info!(
        drivers = park.all_drivers.len(),
        passengers = park.all_passengers.len(),
        trips = park.trips.len(),
        seed = params.seed,
        "generated park"
    );
    save_park_json(&park, output)
        .with_context(|| format!("failed to write park to {}", output.display()))
}

pub fn export_trips(input: &Path, output: &Path) -> Result<()> {
    let park = load_park(input)?;
    export_trips_parquet(&park, output)
        .with_context(|| format!("failed to write trips to {}", output.display()))
}
