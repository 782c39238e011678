//! Export of reports and trip tables.
//!
//! Reports go to JSON, the driver income breakdown to CSV, and the raw trip
//! table to Parquet for analysis in external tools.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::TaxiPark;
use crate::report::ParkReport;

mod income_csv;
mod report_json;
mod trips_parquet;
mod writer_utils;

/// Write the full report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn export_report_json(report: &ParkReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    report_json::export_report_json_impl(report, file)?;
    info!(path = %path.display(), "exported report json");
    Ok(())
}

/// Write one CSV row per earning driver: `driver,income,share_pct`.
///
/// # Errors
///
/// Returns [`TaxiParkError::EmptyExport`](crate::TaxiParkError::EmptyExport)
/// when the report has no driver income, or an I/O / CSV error.
pub fn export_driver_income_csv(report: &ParkReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    writer_utils::ensure_not_empty(&report.driver_income, "driver income")?;
    let file = File::create(path)?;
    income_csv::export_driver_income_csv_impl(&report.driver_income, file)?;
    info!(
        path = %path.display(),
        rows = report.driver_income.len(),
        "exported driver income csv"
    );
    Ok(())
}

/// Write the park's trips as a Parquet table.
///
/// Columns: `driver`, `passengers` (ids joined with `;`), `passenger_count`,
/// `duration`, `cost`, `discount` (nullable), `discounted`.
///
/// # Errors
///
/// Returns [`TaxiParkError::EmptyExport`](crate::TaxiParkError::EmptyExport)
/// for a park without trips, or an I/O / Arrow / Parquet error.
pub fn export_trips_parquet(park: &TaxiPark, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    writer_utils::ensure_not_empty(&park.trips, "trips")?;
    let file = File::create(path)?;
    trips_parquet::export_trips_parquet_impl(&park.trips, file)?;
    info!(path = %path.display(), rows = park.trips.len(), "exported trips parquet");
    Ok(())
}
