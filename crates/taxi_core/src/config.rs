//! Tunable thresholds for the queries that have them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxiParkError};

/// Width of a trip-duration period, in minutes.
pub const DEFAULT_PERIOD_WIDTH_MINUTES: u32 = 10;

/// Minimum trip count used for faithful passengers in reports.
pub const DEFAULT_FAITHFUL_MIN_TRIPS: usize = 2;

/// Thresholds for the Pareto check: the top `driver_share` of all drivers
/// must earn at least `income_share_pct` percent of total income.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParetoConfig {
    pub driver_share: f64,
    pub income_share_pct: f64,
}

impl Default for ParetoConfig {
    fn default() -> Self {
        Self {
            driver_share: 0.2,
            income_share_pct: 80.0,
        }
    }
}

impl ParetoConfig {
    pub fn with_driver_share(mut self, driver_share: f64) -> Self {
        self.driver_share = driver_share;
        self
    }

    pub fn with_income_share_pct(mut self, income_share_pct: f64) -> Self {
        self.income_share_pct = income_share_pct;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.driver_share > 0.0 && self.driver_share <= 1.0) {
            return Err(TaxiParkError::invalid_config(format!(
                "driver_share must be in (0, 1], got {}",
                self.driver_share
            )));
        }
        if !(self.income_share_pct > 0.0 && self.income_share_pct <= 100.0) {
            return Err(TaxiParkError::invalid_config(format!(
                "income_share_pct must be in (0, 100], got {}",
                self.income_share_pct
            )));
        }
        Ok(())
    }
}

/// Query settings used by [`crate::build_report`] and the CLI.
///
/// Deserializes from partial JSON: missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub period_width_minutes: u32,
    pub faithful_min_trips: usize,
    pub pareto: ParetoConfig,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            period_width_minutes: DEFAULT_PERIOD_WIDTH_MINUTES,
            faithful_min_trips: DEFAULT_FAITHFUL_MIN_TRIPS,
            pareto: ParetoConfig::default(),
        }
    }
}

impl QueryConfig {
    pub fn with_period_width_minutes(mut self, width: u32) -> Self {
        self.period_width_minutes = width;
        self
    }

    pub fn with_faithful_min_trips(mut self, min_trips: usize) -> Self {
        self.faithful_min_trips = min_trips;
        self
    }

    pub fn with_pareto(mut self, pareto: ParetoConfig) -> Self {
        self.pareto = pareto;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.period_width_minutes == 0 {
            return Err(TaxiParkError::invalid_config(
                "period_width_minutes must be positive",
            ));
        }
        self.pareto.validate()
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
