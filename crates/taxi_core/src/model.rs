//! Data model: drivers, passengers, trips and the park that holds them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A driver, identified by name only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
}

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A passenger. Ordering follows the numeric `id`, so sets of passengers
/// iterate as `P-1, P-2, .., P-10` rather than lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Passenger {
    pub id: u32,
    pub name: String,
}

impl Passenger {
    /// Passenger with the conventional display name `P-<id>`.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("P-{id}"),
        }
    }

    pub fn named(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One completed ride.
///
/// `duration` is in minutes. `discount` is `None` when no discount was
/// applied; a present value counts as a discount only when it is strictly
/// positive (see [`Trip::is_discounted`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub driver: Driver,
    pub passengers: BTreeSet<Passenger>,
    pub duration: u32,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Trip {
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration: u32,
        cost: f64,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Absent and non-positive discounts both mean "no discount".
    pub fn is_discounted(&self) -> bool {
        matches!(self.discount, Some(d) if d > 0.0)
    }

    pub fn has_passenger(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }
}

/// The whole dataset. Trips are expected to reference only drivers and
/// passengers listed in `all_drivers` / `all_passengers`; this is assumed,
/// not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    pub all_drivers: BTreeSet<Driver>,
    pub all_passengers: BTreeSet<Passenger>,
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    pub fn new(
        drivers: impl IntoIterator<Item = Driver>,
        passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: drivers.into_iter().collect(),
            all_passengers: passengers.into_iter().collect(),
            trips,
        }
    }

    /// Sum of `cost` over every trip.
    pub fn total_income(&self) -> f64 {
        self.trips.iter().map(|trip| trip.cost).sum()
    }

    pub fn trips_by<'a>(&'a self, driver: &'a Driver) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |trip| &trip.driver == driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passengers_order_by_numeric_id() {
        let set: BTreeSet<Passenger> = [10, 2, 1].into_iter().map(Passenger::new).collect();
        let names: Vec<_> = set.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P-1", "P-2", "P-10"]);
    }

    #[test]
    fn custom_names_do_not_affect_id_ordering() {
        let set: BTreeSet<Passenger> = [
            Passenger::named(3, "Alice"),
            Passenger::named(1, "Zoe"),
            Passenger::new(2),
        ]
        .into_iter()
        .collect();
        let names: Vec<String> = set.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["Zoe", "P-2", "Alice"]);
        assert_ne!(Passenger::named(1, "Zoe"), Passenger::new(1));
    }

    #[test]
    fn absent_and_non_positive_discounts_are_not_discounted() {
        let base = Trip::new(Driver::new("D-1"), [Passenger::new(1)], 5, 10.0);
        assert!(!base.is_discounted());
        assert!(!base.clone().with_discount(0.0).is_discounted());
        assert!(!base.clone().with_discount(-0.1).is_discounted());
        assert!(base.with_discount(0.1).is_discounted());
    }

    #[test]
    fn duplicate_passengers_collapse_into_one_membership() {
        let trip = Trip::new(
            Driver::new("D-1"),
            [Passenger::new(1), Passenger::new(1)],
            5,
            10.0,
        );
        assert_eq!(trip.passengers.len(), 1);
    }

    #[test]
    fn total_income_sums_trip_costs() {
        let d = Driver::new("D-1");
        let park = TaxiPark::new(
            [d.clone()],
            [Passenger::new(1)],
            vec![
                Trip::new(d.clone(), [Passenger::new(1)], 5, 10.0),
                Trip::new(d, [Passenger::new(1)], 5, 2.5),
            ],
        );
        assert_eq!(park.total_income(), 12.5);
    }

    #[test]
    fn json_omits_absent_discount() {
        let trip = Trip::new(Driver::new("D-1"), [Passenger::new(1)], 5, 10.0);
        let json = serde_json::to_string(&trip).unwrap();
        assert!(!json.contains("discount"));

        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trip);
    }
}
