//! Analytical queries over an in-memory taxi park: drivers, passengers and
//! the trips that connect them.
//!
//! Every query is a pure function of a [`TaxiPark`] snapshot and never
//! mutates it, so a park can be shared freely between callers.
//!
//! ```
//! use taxi_core::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::new(
//!     [Driver::new("D-1"), Driver::new("D-2")],
//!     [Passenger::new(1)],
//!     vec![Trip::new(Driver::new("D-1"), [Passenger::new(1)], 12, 20.0)],
//! );
//!
//! assert!(park.find_fake_drivers().contains(&Driver::new("D-2")));
//! assert_eq!(park.most_frequent_trip_duration_period(), Some(10..=19));
//! ```
//!
//! # Modules
//!
//! - [`model`]: drivers, passengers, trips and the park aggregate
//! - [`queries`]: the query operations, implemented on [`TaxiPark`]
//! - [`config`]: tunable query thresholds
//! - [`report`]: one-shot aggregation of every query into a [`ParkReport`]
//! - [`dataset`] / [`export`]: JSON, CSV and Parquet I/O
//! - [`synthetic`]: seeded random parks for benchmarks and experiments

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod model;
pub mod queries;
pub mod report;
pub mod synthetic;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::{ParetoConfig, QueryConfig};
pub use error::{Result, TaxiParkError};
pub use model::{Driver, Passenger, TaxiPark, Trip};
pub use queries::DriverIncome;
pub use report::{build_report, ParkReport};
