use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParetoConfig;
use crate::model::{Driver, TaxiPark};

/// One driver's income and its share of the park's total, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverIncome {
    pub driver: Driver,
    pub income: f64,
    pub share_pct: f64,
}

impl TaxiPark {
    /// Income per driver that drove at least one trip, highest first.
    ///
    /// Equal incomes are ordered by driver name. Shares are `0.0` when the
    /// park has no income at all.
    pub fn income_by_driver(&self) -> Vec<DriverIncome> {
        let total = self.total_income();
        let mut per_driver: HashMap<&Driver, f64> = HashMap::new();
        for trip in &self.trips {
            *per_driver.entry(&trip.driver).or_insert(0.0) += trip.cost;
        }

        let mut incomes: Vec<DriverIncome> = per_driver
            .into_iter()
            .map(|(driver, income)| DriverIncome {
                driver: driver.clone(),
                income,
                share_pct: if total > 0.0 {
                    income * 100.0 / total
                } else {
                    0.0
                },
            })
            .collect();
        incomes.sort_by(|a, b| {
            b.income
                .total_cmp(&a.income)
                .then_with(|| a.driver.cmp(&b.driver))
        });
        incomes
    }

    /// Whether the top 20% of drivers earn at least 80% of total income.
    ///
    /// Returns `false` for a park without income (no trips, or only
    /// zero-cost trips).
    pub fn check_pareto_principle(&self) -> bool {
        self.check_pareto_principle_with(&ParetoConfig::default())
    }

    /// Pareto check with custom thresholds.
    ///
    /// The top group is `floor(driver_share * |all_drivers|)` drivers, capped
    /// at the number of drivers that actually earned something.
    pub fn check_pareto_principle_with(&self, config: &ParetoConfig) -> bool {
        let total = self.total_income();
        if self.trips.is_empty() || total <= 0.0 {
            debug!(trips = self.trips.len(), total, "no income, pareto check fails");
            return false;
        }

        let incomes = self.income_by_driver();
        let top_count =
            ((self.all_drivers.len() as f64 * config.driver_share) as usize).min(incomes.len());
        let top_share_pct: f64 = incomes
            .iter()
            .take(top_count)
            .map(|income| income.share_pct)
            .sum();

        debug!(
            drivers = self.all_drivers.len(),
            earning_drivers = incomes.len(),
            top_count,
            top_share_pct,
            threshold_pct = config.income_share_pct,
            "pareto check"
        );
        top_share_pct >= config.income_share_pct
    }
}
