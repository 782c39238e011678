use std::collections::{BTreeSet, HashSet};

use crate::model::{Driver, TaxiPark};

impl TaxiPark {
    /// Drivers listed in the park that drove no trip at all.
    pub fn find_fake_drivers(&self) -> BTreeSet<Driver> {
        let active: HashSet<&Driver> = self.trips.iter().map(|trip| &trip.driver).collect();
        self.all_drivers
            .iter()
            .filter(|driver| !active.contains(driver))
            .cloned()
            .collect()
    }
}
