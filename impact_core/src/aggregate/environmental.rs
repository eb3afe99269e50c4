//! Environmental report.
//!
//! ```text
//! baseline GHG   = single-use baseline + baseline dishwashing CO2
//! forecast GHG   = single-use forecast + reusable replacement
//!                  + forecast dishwashing CO2 + truck freight
//! baseline water = single-use baseline + baseline dishwasher water
//! forecast water = single-use forecast + reusable replacement + forecast dishwasher water
//! baseline waste = single-use baseline weight
//! forecast waste = single-use forecast weight + reusable replacement weight
//! ```
//!
//! The one-time reusable purchase and the bottle-station avoided impacts are
//! reported alongside and are not part of the annual comparisons.

use serde::{Deserialize, Serialize};

use crate::calculators::{BottleStationResults, Comparison, DishwasherStats, ImpactTotals};

use super::CategoryResults;

/// Dishwashing energy and water, baseline vs forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DishwashingImpact {
    /// Electric plus gas CO2, metric tons
    pub ghg_mtco2e: Comparison,
    pub water_gal: Comparison,
    pub baseline: DishwasherStats,
    pub forecast: DishwasherStats,
}

/// GHG, water and waste projections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalResults {
    /// Metric tons CO2e per year
    pub annual_ghg: Comparison,
    /// Gallons per year
    pub annual_water: Comparison,
    /// Pounds of material per year
    pub annual_waste: Comparison,
    pub single_use_baseline: ImpactTotals,
    pub single_use_forecast: ImpactTotals,
    pub reusable_initial: ImpactTotals,
    pub reusable_replacement: ImpactTotals,
    pub dishwashing: DishwashingImpact,
    pub transportation_ghg_mtco2e: f64,
    pub bottle_station: BottleStationResults,
}

impl EnvironmentalResults {
    pub fn from_categories(categories: &CategoryResults) -> Self {
        let single_use_baseline = categories.single_use.baseline.totals;
        let single_use_forecast = categories.single_use.forecast.totals;
        let reusable_initial = categories.reusable.initial_purchase.totals;
        let reusable_replacement = categories.reusable.annual_replacement.totals;

        let dishwashing = DishwashingImpact {
            ghg_mtco2e: categories.dishwashing.co2_mt(),
            water_gal: categories.dishwashing.water(),
            baseline: categories.dishwashing.baseline,
            forecast: categories.dishwashing.forecast,
        };
        let transportation = categories.transportation_ghg_mtco2e;

        let annual_ghg = Comparison::new(
            single_use_baseline.ghg_mtco2e + dishwashing.ghg_mtco2e.baseline,
            single_use_forecast.ghg_mtco2e
                + reusable_replacement.ghg_mtco2e
                + dishwashing.ghg_mtco2e.forecast
                + transportation,
        );
        let annual_water = Comparison::new(
            single_use_baseline.water_gal + dishwashing.water_gal.baseline,
            single_use_forecast.water_gal + reusable_replacement.water_gal + dishwashing.water_gal.forecast,
        );
        let annual_waste = Comparison::new(
            single_use_baseline.weight_lbs,
            single_use_forecast.weight_lbs + reusable_replacement.weight_lbs,
        );

        EnvironmentalResults {
            annual_ghg,
            annual_water,
            annual_waste,
            single_use_baseline,
            single_use_forecast,
            reusable_initial,
            reusable_replacement,
            dishwashing,
            transportation_ghg_mtco2e: transportation,
            bottle_station: categories.bottle_station,
        }
    }
}
