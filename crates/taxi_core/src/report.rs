//! One-shot report combining every query over a park.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::QueryConfig;
use crate::model::TaxiPark;
use crate::queries::DriverIncome;

/// The busiest trip-duration period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub start: u32,
    pub end: u32,
    pub trips: usize,
}

/// Results of all park queries, ready for serialization.
///
/// Drivers are reported by name and passengers by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkReport {
    pub total_drivers: usize,
    pub total_passengers: usize,
    pub total_trips: usize,
    pub total_income: f64,
    pub fake_drivers: Vec<String>,
    /// Minimum trip count used for `faithful_passengers`.
    pub faithful_min_trips: usize,
    pub faithful_passengers: Vec<u32>,
    /// Driver name to passengers who rode with them more than once.
    /// Drivers without such passengers are left out.
    pub frequent_passengers: BTreeMap<String, Vec<u32>>,
    pub smart_passengers: Vec<u32>,
    pub most_frequent_period: Option<PeriodSummary>,
    pub pareto_principle_holds: bool,
    pub driver_income: Vec<DriverIncome>,
}

pub fn build_report(park: &TaxiPark, config: &QueryConfig) -> ParkReport {
    let width = config.period_width_minutes;
    let histogram = park.trip_duration_histogram(width);
    let most_frequent_period = park
        .most_frequent_trip_duration_period_with(width)
        .map(|range| PeriodSummary {
            start: *range.start(),
            end: *range.end(),
            trips: histogram.get(range.start()).copied().unwrap_or(0),
        });

    let frequent_passengers: BTreeMap<String, Vec<u32>> = park
        .frequent_passengers_by_driver()
        .into_iter()
        .map(|(driver, passengers)| (driver.name, passengers.iter().map(|p| p.id).collect()))
        .collect();

    let report = ParkReport {
        total_drivers: park.all_drivers.len(),
        total_passengers: park.all_passengers.len(),
        total_trips: park.trips.len(),
        total_income: park.total_income(),
        fake_drivers: park
            .find_fake_drivers()
            .into_iter()
            .map(|d| d.name)
            .collect(),
        faithful_min_trips: config.faithful_min_trips,
        faithful_passengers: park
            .find_faithful_passengers(config.faithful_min_trips)
            .iter()
            .map(|p| p.id)
            .collect(),
        frequent_passengers,
        smart_passengers: park.find_smart_passengers().iter().map(|p| p.id).collect(),
        most_frequent_period,
        pareto_principle_holds: park.check_pareto_principle_with(&config.pareto),
        driver_income: park.income_by_driver(),
    };

    debug!(
        trips = report.total_trips,
        drivers = report.total_drivers,
        fake_drivers = report.fake_drivers.len(),
        pareto = report.pareto_principle_holds,
        "built park report"
    );
    report
}
