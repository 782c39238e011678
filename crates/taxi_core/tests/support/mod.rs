#![allow(dead_code)]

use taxi_core::synthetic::{generate_park, SyntheticParkParams};
use taxi_core::TaxiPark;

pub use taxi_core::test_helpers::{driver, drivers, park, passenger, passengers, sample_park, trip};

/// A mid-sized seeded park for tests that want realistic volume.
pub fn seeded_park(seed: u64) -> TaxiPark {
    generate_park(
        &SyntheticParkParams::default()
            .with_drivers(20)
            .with_passengers(60)
            .with_trips(400)
            .with_active_driver_share(0.75)
            .with_seed(seed),
    )
}
