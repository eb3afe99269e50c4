//! Financial report.
//!
//! All recurring amounts are annual. One-time amounts (the reusable and
//! bottle-station purchases, plus any `One Time` labor, freight or other
//! entry) are collected in `one_time_costs` and drive the payback period.

use serde::{Deserialize, Serialize};

use crate::calculators::Comparison;
use crate::frequency::Frequency;
use crate::inventory::ProjectInventory;

use super::CategoryResults;

/// Dishwashing utility costs, baseline vs forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DishwashingCosts {
    pub electric: Comparison,
    pub gas: Comparison,
    pub water: Comparison,
    pub total: Comparison,
}

/// Reusable purchasing costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReusableCosts {
    /// One-time initial purchase
    pub initial_purchase: f64,
    /// Yearly replacement of unreturned units
    pub annual_replacement: f64,
}

/// Baseline vs forecast operating costs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialResults {
    pub single_use_purchasing: Comparison,
    pub reusable_purchasing: ReusableCosts,
    pub dishwashing: DishwashingCosts,
    pub waste_hauling: Comparison,
    /// Annual additional labor (negative is a saving)
    pub labor: f64,
    /// Annual truck freight
    pub transportation: f64,
    pub other_expenses: f64,
    pub one_time_costs: f64,
    /// Purchases avoided by bottle-filling stations
    pub bottle_station_savings: f64,
    pub annual_cost: Comparison,
    /// `annual_cost.baseline - annual_cost.forecast`
    pub annual_savings: f64,
    /// Months of savings needed to recover the one-time costs; absent when the
    /// project saves nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_period_months: Option<f64>,
}

/// Split `(cost, frequency)` entries into annual and one-time totals.
fn split_recurring(entries: impl Iterator<Item = (f64, Frequency)>) -> (f64, f64) {
    entries.fold((0.0, 0.0), |(annual, one_time), (cost, frequency)| {
        if frequency.is_one_time() {
            (annual, one_time + cost)
        } else {
            (annual + frequency.annualize(cost), one_time)
        }
    })
}

impl FinancialResults {
    pub fn from_categories(inventory: &ProjectInventory, categories: &CategoryResults) -> Self {
        let single_use_purchasing = Comparison::new(
            categories.single_use.baseline.totals.cost,
            categories.single_use.forecast.totals.cost,
        );

        let reusable_purchasing = ReusableCosts {
            initial_purchase: categories.reusable.initial_purchase.totals.cost,
            annual_replacement: categories.reusable.annual_replacement.totals.cost,
        };

        let dish = &categories.dishwashing;
        let dishwashing = DishwashingCosts {
            electric: Comparison::new(dish.baseline.electric_cost, dish.forecast.electric_cost),
            gas: Comparison::new(dish.baseline.gas_cost, dish.forecast.gas_cost),
            water: Comparison::new(dish.baseline.water_cost, dish.forecast.water_cost),
            total: dish.cost(),
        };

        let waste_hauling = Comparison::new(
            inventory.waste_hauling.iter().map(|h| h.monthly_cost * 12.0).sum(),
            inventory.waste_hauling.iter().map(|h| h.new_monthly_cost * 12.0).sum(),
        );

        let (labor, labor_one_time) = split_recurring(inventory.labor_costs.iter().map(|c| (c.cost, c.frequency)));
        let (transportation, transportation_one_time) =
            split_recurring(inventory.transportation_costs.iter().map(|c| (c.cost, c.frequency)));
        let (other_expenses, other_one_time) =
            split_recurring(inventory.other_expenses.iter().map(|c| (c.cost, c.frequency)));

        let one_time_costs = reusable_purchasing.initial_purchase
            + categories.bottle_station.station_cost
            + labor_one_time
            + transportation_one_time
            + other_one_time;

        let annual_cost = Comparison::new(
            single_use_purchasing.baseline + dishwashing.total.baseline + waste_hauling.baseline,
            single_use_purchasing.forecast
                + reusable_purchasing.annual_replacement
                + dishwashing.total.forecast
                + waste_hauling.forecast
                + labor
                + transportation
                + other_expenses,
        );
        let annual_savings = annual_cost.reduction();

        let payback_period_months = if annual_savings > 0.0 {
            Some(one_time_costs / (annual_savings / 12.0))
        } else {
            None
        };

        FinancialResults {
            single_use_purchasing,
            reusable_purchasing,
            dishwashing,
            waste_hauling,
            labor,
            transportation,
            other_expenses,
            one_time_costs,
            bottle_station_savings: categories.bottle_station.avoided_cost,
            annual_cost,
            annual_savings,
            payback_period_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;
    use crate::settings::EngineSettings;

    fn results() -> (CategoryResults, FinancialResults) {
        let inventory = fixtures::inventory();
        let categories =
            CategoryResults::calculate(&inventory, &fixtures::catalog(), &EngineSettings::default()).unwrap();
        let financial = FinancialResults::from_categories(&inventory, &categories);
        (categories, financial)
    }

    #[test]
    fn test_single_use_purchasing() {
        let (_, f) = results();
        // cups: 4 * 90 * 52, clamshells: 10 * 42 * 12
        assert_eq!(f.single_use_purchasing.baseline, 18_720.0 + 5_040.0);
        // cups: 1 * 90 * 52, clamshells: 2 * 42 * 12
        assert_eq!(f.single_use_purchasing.forecast, 4_680.0 + 1_008.0);
    }

    #[test]
    fn test_recurring_and_one_time_split() {
        let (_, f) = results();
        assert_eq!(f.labor, 150.0 * 52.0);
        assert_eq!(f.transportation, 0.0);
        assert_eq!(f.other_expenses, 35.0 * 12.0);
        // mugs 5 * 108 + plates 8 * 96 + station 1400 + delivery 250 + racks 400
        assert_eq!(f.reusable_purchasing.initial_purchase, 540.0 + 768.0);
        assert_eq!(f.one_time_costs, 540.0 + 768.0 + 1400.0 + 250.0 + 400.0);
    }

    #[test]
    fn test_additional_station_lines_are_one_time_costs() {
        let mut inventory = fixtures::inventory();
        let mut extra = inventory.reusable_items[2].clone();
        extra.cases_purchased = 5.0;
        inventory.reusable_items.push(extra);

        let categories =
            CategoryResults::calculate(&inventory, &fixtures::catalog(), &EngineSettings::default()).unwrap();
        let f = FinancialResults::from_categories(&inventory, &categories);
        let (_, base) = results();
        assert_eq!(categories.bottle_station.station_count, 6.0);
        assert_eq!(f.one_time_costs, base.one_time_costs + 5.0 * 1400.0);
        assert!(categories.warnings().is_empty());
    }

    #[test]
    fn test_waste_hauling_annualized() {
        let (_, f) = results();
        assert_eq!(f.waste_hauling.baseline, 7200.0);
        assert_eq!(f.waste_hauling.forecast, 5400.0);
    }

    #[test]
    fn test_totals_and_payback() {
        let (c, f) = results();
        let baseline = f.single_use_purchasing.baseline + c.dishwashing.baseline.total_cost() + 7200.0;
        assert!((f.annual_cost.baseline - baseline).abs() < 1e-9);
        assert!((f.annual_savings - (f.annual_cost.baseline - f.annual_cost.forecast)).abs() < 1e-9);
        assert!(f.annual_savings > 0.0);

        let payback = f.payback_period_months.unwrap();
        assert!((payback - f.one_time_costs * 12.0 / f.annual_savings).abs() < 1e-9);
    }

    #[test]
    fn test_no_payback_without_savings() {
        let mut inventory = ProjectInventory::for_state("CA");
        inventory.labor_costs = vec![crate::inventory::LaborCost {
            description: "Training".to_string(),
            cost: 100.0,
            frequency: Frequency::Monthly,
        }];
        let categories = CategoryResults::calculate(&inventory, &fixtures::catalog(), &EngineSettings::default())
            .unwrap();
        let f = FinancialResults::from_categories(&inventory, &categories);
        assert_eq!(f.annual_savings, -1200.0);
        assert_eq!(f.payback_period_months, None);
        let json = serde_json::to_value(&f).unwrap();
        assert!(json.get("payback_period_months").is_none());
    }
}
