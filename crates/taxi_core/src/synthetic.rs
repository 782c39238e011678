//! Seeded random parks for benchmarks, experiments and the `generate` command.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::{Driver, Passenger, TaxiPark, Trip};

/// Shape of a generated park.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticParkParams {
    pub num_drivers: u32,
    pub num_passengers: u32,
    pub num_trips: usize,
    /// Fraction (0.0–1.0) of drivers that get trips; the rest stay fake.
    pub active_driver_share: f64,
    pub max_passengers_per_trip: u32,
    pub max_duration_minutes: u32,
    /// Upper bound of the per-trip cost.
    pub max_cost: f64,
    /// Probability (0.0–1.0) that a trip carries a positive discount.
    pub discount_probability: f64,
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
}

impl Default for SyntheticParkParams {
    fn default() -> Self {
        Self {
            num_drivers: 50,
            num_passengers: 200,
            num_trips: 1_000,
            active_driver_share: 0.9,
            max_passengers_per_trip: 4,
            max_duration_minutes: 60,
            max_cost: 50.0,
            discount_probability: 0.3,
            seed: 0,
        }
    }
}

impl SyntheticParkParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_drivers(mut self, num_drivers: u32) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_passengers(mut self, num_passengers: u32) -> Self {
        self.num_passengers = num_passengers;
        self
    }

    pub fn with_trips(mut self, num_trips: usize) -> Self {
        self.num_trips = num_trips;
        self
    }

    pub fn with_active_driver_share(mut self, share: f64) -> Self {
        self.active_driver_share = share;
        self
    }

    pub fn with_discount_probability(mut self, probability: f64) -> Self {
        self.discount_probability = probability;
        self
    }
}

/// Generate a park. The same params always produce the same park.
///
/// Trips are only generated when there is at least one active driver and
/// one passenger.
pub fn generate_park(params: &SyntheticParkParams) -> TaxiPark {
    let mut rng = StdRng::seed_from_u64(params.seed);

    let drivers: Vec<Driver> = (1..=params.num_drivers)
        .map(|n| Driver::new(format!("D-{n}")))
        .collect();
    let passengers: Vec<Passenger> = (1..=params.num_passengers).map(Passenger::new).collect();

    let active_drivers = ((params.num_drivers as f64 * params.active_driver_share.clamp(0.0, 1.0))
        .ceil() as usize)
        .min(drivers.len());
    let max_per_trip = params.max_passengers_per_trip.clamp(1, params.num_passengers.max(1)) as usize;
    let discount_probability = if params.discount_probability.is_nan() {
        0.0
    } else {
        params.discount_probability.clamp(0.0, 1.0)
    };
    let max_cost = params.max_cost.max(0.0);

    let mut trips = Vec::new();
    if active_drivers > 0 && !passengers.is_empty() {
        trips.reserve(params.num_trips);
        for _ in 0..params.num_trips {
            let driver = drivers[rng.gen_range(0..active_drivers)].clone();

            let riders = rng.gen_range(1..=max_per_trip);
            let mut chosen = BTreeSet::new();
            while chosen.len() < riders {
                chosen.insert(passengers[rng.gen_range(0..passengers.len())].clone());
            }

            let duration = rng.gen_range(0..=params.max_duration_minutes);
            let cost = (rng.gen::<f64>() * max_cost * 100.0).round() / 100.0;
            let mut trip = Trip::new(driver, chosen, duration, cost);
            if rng.gen_bool(discount_probability) {
                trip = trip.with_discount(rng.gen_range(0.05..0.5));
            }
            trips.push(trip);
        }
    }

    TaxiPark::new(drivers, passengers, trips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_park() {
        let params = SyntheticParkParams::default().with_trips(200).with_seed(7);
        assert_eq!(generate_park(&params), generate_park(&params));
    }

    #[test]
    fn different_seed_different_trips() {
        let params = SyntheticParkParams::default().with_trips(200);
        let a = generate_park(&params.with_seed(1));
        let b = generate_park(&params.with_seed(2));
        assert_ne!(a.trips, b.trips);
    }

    #[test]
    fn respects_requested_shape() {
        let params = SyntheticParkParams::default()
            .with_drivers(10)
            .with_passengers(30)
            .with_trips(500)
            .with_active_driver_share(0.5);
        let park = generate_park(&params);

        assert_eq!(park.all_drivers.len(), 10);
        assert_eq!(park.all_passengers.len(), 30);
        assert_eq!(park.trips.len(), 500);
        assert!(park.find_fake_drivers().len() >= 5);
        for trip in &park.trips {
            assert!(!trip.passengers.is_empty());
            assert!(trip.passengers.len() <= 4);
            assert!(trip.duration <= 60);
            assert!(trip.cost >= 0.0 && trip.cost <= 50.0);
            assert!(park.all_drivers.contains(&trip.driver));
            assert!(trip.passengers.is_subset(&park.all_passengers));
        }
    }

    #[test]
    fn nan_discount_probability_generates_no_discounts() {
        let params = SyntheticParkParams::default()
            .with_trips(100)
            .with_discount_probability(f64::NAN);
        let park = generate_park(&params);
        assert_eq!(park.trips.len(), 100);
        assert!(park.trips.iter().all(|trip| trip.discount.is_none()));
    }

    #[test]
    fn out_of_range_discount_probability_is_clamped() {
        let park = generate_park(
            &SyntheticParkParams::default()
                .with_trips(50)
                .with_discount_probability(3.0),
        );
        assert!(park.trips.iter().all(|trip| trip.is_discounted()));
    }

    #[test]
    fn no_passengers_means_no_trips() {
        let park = generate_park(&SyntheticParkParams::default().with_passengers(0));
        assert!(park.trips.is_empty());
        assert_eq!(park.find_fake_drivers(), park.all_drivers);
    }
}
