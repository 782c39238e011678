use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::model::{Driver, Passenger, TaxiPark, Trip};

/// Number of trips each passenger appears in. A trip counts once per
/// passenger since `Trip::passengers` is a set.
fn trip_counts<'a>(trips: impl IntoIterator<Item = &'a Trip>) -> HashMap<&'a Passenger, usize> {
    let mut counts = HashMap::new();
    for trip in trips {
        for passenger in &trip.passengers {
            *counts.entry(passenger).or_insert(0) += 1;
        }
    }
    counts
}

#[derive(Debug, Default, Clone, Copy)]
struct DiscountTally {
    discounted: usize,
    full_price: usize,
}

impl TaxiPark {
    /// Passengers from `all_passengers` with at least `min_trips` trips.
    ///
    /// With `min_trips == 0` this is every passenger, including those who
    /// never rode.
    pub fn find_faithful_passengers(&self, min_trips: usize) -> BTreeSet<Passenger> {
        let counts = trip_counts(&self.trips);
        self.all_passengers
            .iter()
            .filter(|passenger| counts.get(passenger).copied().unwrap_or(0) >= min_trips)
            .cloned()
            .collect()
    }

    /// Passengers who rode with `driver` on two or more separate trips.
    pub fn find_frequent_passengers(&self, driver: &Driver) -> BTreeSet<Passenger> {
        trip_counts(self.trips_by(driver))
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(passenger, _)| passenger.clone())
            .collect()
    }

    /// [`find_frequent_passengers`](Self::find_frequent_passengers) for every
    /// driver at once, in a single pass over the trips. Drivers without
    /// frequent passengers are absent from the map.
    pub fn frequent_passengers_by_driver(&self) -> BTreeMap<Driver, BTreeSet<Passenger>> {
        let mut counts: HashMap<(&Driver, &Passenger), usize> = HashMap::new();
        for trip in &self.trips {
            for passenger in &trip.passengers {
                *counts.entry((&trip.driver, passenger)).or_insert(0) += 1;
            }
        }

        let mut by_driver: BTreeMap<Driver, BTreeSet<Passenger>> = BTreeMap::new();
        for ((driver, passenger), count) in counts {
            if count > 1 {
                by_driver
                    .entry(driver.clone())
                    .or_default()
                    .insert(passenger.clone());
            }
        }
        by_driver
    }

    /// Passengers whose discounted trips outnumber their full-price trips.
    pub fn find_smart_passengers(&self) -> BTreeSet<Passenger> {
        let mut tallies: HashMap<&Passenger, DiscountTally> = HashMap::new();
        for trip in &self.trips {
            let discounted = trip.is_discounted();
            for passenger in &trip.passengers {
                let tally = tallies.entry(passenger).or_default();
                if discounted {
                    tally.discounted += 1;
                } else {
                    tally.full_price += 1;
                }
            }
        }

        tallies
            .into_iter()
            .filter(|(_, tally)| tally.discounted > tally.full_price)
            .map(|(passenger, _)| passenger.clone())
            .collect()
    }
}
