//! Query operations over a [`TaxiPark`](crate::TaxiPark).
//!
//! Each query lives in an `impl TaxiPark` block in its own submodule and
//! takes `&self`: they are independent, side-effect free, and total.
//!
//! - [`drivers`]: drivers with no trips
//! - [`passengers`]: faithful, frequent and smart passengers
//! - [`durations`]: trip-duration periods
//! - [`pareto`]: per-driver income and the 20/80 check

pub mod drivers;
pub mod durations;
pub mod pareto;
pub mod passengers;

pub use durations::period_range;
pub use pareto::DriverIncome;
