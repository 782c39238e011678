//! Test helpers for building small parks by number.
//!
//! Drivers are named `D-<n>` and passengers `P-<n>`, so a test can describe
//! a park as compactly as `park(1..=3, 1..=5, vec![trip(1, [1, 2], 10, 12.0)])`.

use std::collections::BTreeSet;

use crate::model::{Driver, Passenger, TaxiPark, Trip};

pub fn driver(n: u32) -> Driver {
    Driver::new(format!("D-{n}"))
}

pub fn passenger(id: u32) -> Passenger {
    Passenger::new(id)
}

pub fn passengers(ids: impl IntoIterator<Item = u32>) -> BTreeSet<Passenger> {
    ids.into_iter().map(passenger).collect()
}

pub fn drivers(ns: impl IntoIterator<Item = u32>) -> BTreeSet<Driver> {
    ns.into_iter().map(driver).collect()
}

/// Undiscounted trip; chain `.with_discount(..)` for a discounted one.
pub fn trip(
    driver_n: u32,
    passenger_ids: impl IntoIterator<Item = u32>,
    duration: u32,
    cost: f64,
) -> Trip {
    Trip::new(
        driver(driver_n),
        passenger_ids.into_iter().map(passenger),
        duration,
        cost,
    )
}

pub fn park(
    driver_ns: impl IntoIterator<Item = u32>,
    passenger_ids: impl IntoIterator<Item = u32>,
    trips: Vec<Trip>,
) -> TaxiPark {
    TaxiPark::new(
        driver_ns.into_iter().map(driver),
        passenger_ids.into_iter().map(passenger),
        trips,
    )
}

/// Two drivers, two passengers, three trips in three distinct periods:
///
/// | driver | passengers | duration | cost | discount |
/// |--------|------------|----------|------|----------|
/// | D-1    | P-1        | 5        | 10   | -        |
/// | D-1    | P-1, P-2   | 15       | 20   | 5        |
/// | D-2    | P-2        | 25       | 30   | -        |
pub fn sample_park() -> TaxiPark {
    park(
        1..=2,
        1..=2,
        vec![
            trip(1, [1], 5, 10.0),
            trip(1, [1, 2], 15, 20.0).with_discount(5.0),
            trip(2, [2], 25, 30.0),
        ],
    )
}
