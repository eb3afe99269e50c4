//! Annual dashboard summary.
//!
//! A condensed cross-section of the environmental and financial reports,
//! rounded to 2 decimals (GHG to 3) and expressed in the inventory's display
//! units. Reductions are `baseline - forecast`, so positive is good.

use serde::{Deserialize, Serialize};

use crate::inventory::ProjectInventory;
use crate::units::{round2, round_to, Gallons, Kilograms, Liters, Pounds};

use super::{EnvironmentalResults, FinancialResults};

/// Headline annual figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub currency: String,
    pub annual_dollar_savings: f64,
    pub one_time_costs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payback_period_months: Option<f64>,
    pub single_use_units_avoided: f64,
    pub waste_reduction: f64,
    /// "lb" or "kg"
    pub waste_unit: String,
    pub ghg_reduction_mtco2e: f64,
    pub water_savings: f64,
    /// "gal" or "L"
    pub water_unit: String,
    pub bottles_saved: f64,
}

impl AnnualSummary {
    pub fn from_results(
        inventory: &ProjectInventory,
        environmental: &EnvironmentalResults,
        financial: &FinancialResults,
    ) -> Self {
        let waste_lbs = Pounds(environmental.annual_waste.reduction());
        let water_gal = Gallons(environmental.annual_water.reduction());

        let (waste_reduction, waste_unit, water_savings, water_unit) = if inventory.display_as_metric {
            let kg: Kilograms = waste_lbs.into();
            let liters: Liters = water_gal.into();
            (kg.0, "kg", liters.0, "L")
        } else {
            (waste_lbs.0, "lb", water_gal.0, "gal")
        };

        AnnualSummary {
            currency: inventory.currency.clone(),
            annual_dollar_savings: round2(financial.annual_savings),
            one_time_costs: round2(financial.one_time_costs),
            payback_period_months: financial.payback_period_months.map(round2),
            single_use_units_avoided: round2(
                environmental.single_use_baseline.units - environmental.single_use_forecast.units,
            ),
            waste_reduction: round2(waste_reduction),
            waste_unit: waste_unit.to_string(),
            ghg_reduction_mtco2e: round_to(environmental.annual_ghg.reduction(), 3),
            water_savings: round2(water_savings),
            water_unit: water_unit.to_string(),
            bottles_saved: round2(environmental.bottle_station.bottles_saved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{calculate_project, fixtures};
    use crate::settings::EngineSettings;
    use crate::units::GRAMS_PER_POUND;

    #[test]
    fn test_imperial_summary() {
        let results =
            calculate_project(&fixtures::inventory(), &fixtures::catalog(), &EngineSettings::default()).unwrap();
        let s = &results.annual_summary;
        assert_eq!(s.currency, "USD");
        assert_eq!(s.waste_unit, "lb");
        assert_eq!(s.water_unit, "gal");
        assert_eq!(s.annual_dollar_savings, round2(results.financial.annual_savings));
        // cups: (4 - 1) * 1000 * 52, clamshells: (10 - 2) * 200 * 12
        assert_eq!(s.single_use_units_avoided, 156_000.0 + 19_200.0);
        assert_eq!(s.bottles_saved, 12_500.0);
        assert!(s.waste_reduction > 0.0);
    }

    #[test]
    fn test_metric_summary() {
        let mut inventory = fixtures::inventory();
        let imperial = calculate_project(&inventory, &fixtures::catalog(), &EngineSettings::default()).unwrap();
        inventory.display_as_metric = true;
        let metric = calculate_project(&inventory, &fixtures::catalog(), &EngineSettings::default()).unwrap();

        assert_eq!(metric.annual_summary.waste_unit, "kg");
        assert_eq!(metric.annual_summary.water_unit, "L");
        let lbs = imperial.environmental.annual_waste.reduction();
        assert_eq!(metric.annual_summary.waste_reduction, round2(lbs * GRAMS_PER_POUND / 1000.0));
        // Only the display changes
        assert_eq!(metric.environmental, imperial.environmental);
        assert_eq!(metric.financial, imperial.financial);
    }
}
