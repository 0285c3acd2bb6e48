//! Built-in driver scenarios.
//!
//! Two fixed catalogs with the orders that exercise their edge cases: just
//! under, at and just over a pack size, and the large orders around 12 000.

use packs_core::{Catalog, Dispatcher, OrderPlan, PackResult};
use serde::Serialize;
use tracing::info;

/// A catalog and the orders to run against it.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub pack_sizes: &'static [i64],
    pub orders: &'static [i64],
}

/// The five-pack and six-pack scenarios.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "five-packs",
        pack_sizes: &[5000, 2000, 1000, 500, 250],
        orders: &[1, 249, 250, 251, 500, 501, 11_999, 12_000, 12_001],
    },
    Scenario {
        name: "six-packs",
        pack_sizes: &[5000, 2000, 1000, 500, 251, 250],
        orders: &[
            1, 249, 250, 251, 500, 501, 502, 751, 1_502, 11_999, 12_000, 12_001,
        ],
    },
];

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub pack_sizes: Vec<i64>,
    pub plans: Vec<OrderPlan>,
}

impl Scenario {
    /// Plans every order of the scenario.
    pub fn run(&self, dispatcher: &Dispatcher) -> PackResult<ScenarioReport> {
        let catalog = Catalog::new(self.pack_sizes)?;
        info!(
            scenario = self.name,
            orders = self.orders.len(),
            "Running scenario"
        );

        let plans = self
            .orders
            .iter()
            .map(|&quantity| dispatcher.plan(&catalog, quantity))
            .collect::<PackResult<Vec<_>>>()?;

        Ok(ScenarioReport {
            name: self.name.to_string(),
            pack_sizes: self.pack_sizes.to_vec(),
            plans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packs_core::Strategy;

    #[test]
    fn test_all_scenarios_resolve() {
        let dispatcher = Dispatcher::new();
        for scenario in SCENARIOS {
            let report = scenario.run(&dispatcher).unwrap();
            assert_eq!(report.plans.len(), scenario.orders.len());
            for plan in &report.plans {
                assert!(plan.total_units() >= plan.requested);
            }
        }
    }

    #[test]
    fn test_six_pack_scenario_is_mostly_exact() {
        let report = SCENARIOS[1].run(&Dispatcher::new()).unwrap();
        let greedy: Vec<i64> = report
            .plans
            .iter()
            .filter(|p| p.strategy == Strategy::Greedy)
            .map(|p| p.requested)
            .collect();
        assert_eq!(greedy, vec![1, 249, 11_999]);
    }
}
