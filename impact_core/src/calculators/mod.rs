//! # Calculators
//!
//! The leaf and category calculators. Each one is a pure function of its inputs
//! and follows the same pattern:
//!
//! - input: a slice of the [`ProjectInventory`](crate::inventory::ProjectInventory),
//!   plus the [`ProductCatalog`](crate::catalog::ProductCatalog) or
//!   [`UtilityRates`](crate::constants::UtilityRates) it needs
//! - output: a `*Results` / `*Stats` struct (JSON-serializable)
//! - `calculate(...) -> CalcResult<...>` when a lookup can fail
//!
//! ## Available Calculators
//!
//! - [`return_rate`] - reusable return rate and shrinkage
//! - [`transportation`] - truck freight emissions
//! - [`dishwasher`] - dishwasher utility usage, cost and CO2
//! - [`single_use`] - single-use purchasing impacts, baseline vs forecast
//! - [`reusable`] - reusable purchase and replacement impacts
//! - [`bottle_station`] - bottles avoided by filling stations

pub mod bottle_station;
pub mod dishwasher;
pub mod return_rate;
pub mod reusable;
pub mod single_use;
pub mod transportation;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::EmissionFactor;
use crate::units::Pounds;

pub use bottle_station::BottleStationResults;
pub use dishwasher::{DishwasherStats, DishwashingResults};
pub use return_rate::ReturnRateSummary;
pub use reusable::ReusableResults;
pub use single_use::SingleUseResults;

/// Units, cost and impacts for a group of purchases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactTotals {
    pub units: f64,
    pub cost: f64,
    pub weight_lbs: f64,
    pub ghg_mtco2e: f64,
    pub water_gal: f64,
}

impl ImpactTotals {
    /// Impacts of `units` items weighing `unit_weight` each.
    pub fn for_units(units: f64, cost: f64, unit_weight: Pounds, factor: EmissionFactor) -> Self {
        let weight_lbs = units * unit_weight.0;
        ImpactTotals {
            units,
            cost,
            weight_lbs,
            ghg_mtco2e: weight_lbs * factor.mtco2e_per_lb,
            water_gal: weight_lbs * factor.water_gal_per_lb,
        }
    }

    pub fn add(&mut self, other: &ImpactTotals) {
        self.units += other.units;
        self.cost += other.cost;
        self.weight_lbs += other.weight_lbs;
        self.ghg_mtco2e += other.ghg_mtco2e;
        self.water_gal += other.water_gal;
    }

    /// Every field multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> ImpactTotals {
        ImpactTotals {
            units: self.units * factor,
            cost: self.cost * factor,
            weight_lbs: self.weight_lbs * factor,
            ghg_mtco2e: self.ghg_mtco2e * factor,
            water_gal: self.water_gal * factor,
        }
    }

    /// Field-wise `self - other`
    pub fn minus(&self, other: &ImpactTotals) -> ImpactTotals {
        ImpactTotals {
            units: self.units - other.units,
            cost: self.cost - other.cost,
            weight_lbs: self.weight_lbs - other.weight_lbs,
            ghg_mtco2e: self.ghg_mtco2e - other.ghg_mtco2e,
            water_gal: self.water_gal - other.water_gal,
        }
    }
}

/// Totals plus a per-material breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub totals: ImpactTotals,
    /// Keyed by lowercase material name
    pub by_material: BTreeMap<String, ImpactTotals>,
}

impl CategoryTotals {
    pub fn record(&mut self, material: &str, impact: &ImpactTotals) {
        self.totals.add(impact);
        self.by_material
            .entry(material.trim().to_lowercase())
            .or_default()
            .add(impact);
    }

    pub fn scaled(&self, factor: f64) -> CategoryTotals {
        CategoryTotals {
            totals: self.totals.scaled(factor),
            by_material: self
                .by_material
                .iter()
                .map(|(material, impact)| (material.clone(), impact.scaled(factor)))
                .collect(),
        }
    }
}

/// A baseline figure, its forecast, and `forecast - baseline`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub baseline: f64,
    pub forecast: f64,
    pub change: f64,
}

impl Comparison {
    pub fn new(baseline: f64, forecast: f64) -> Self {
        Comparison {
            baseline,
            forecast,
            change: forecast - baseline,
        }
    }

    /// `baseline - forecast`; positive when the forecast is lower
    pub fn reduction(&self) -> f64 {
        self.baseline - self.forecast
    }
}

/// Which inventory list a line item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineItemCategory {
    SingleUse,
    Reusable,
}

/// A line item left out of the aggregates because its product id did not
/// resolve in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGapWarning {
    pub category: LineItemCategory,
    pub product_id: String,
    pub message: String,
}

impl DataGapWarning {
    /// Build and log a warning for an unresolved product id.
    pub fn unresolved_product(category: LineItemCategory, product_id: &str) -> Self {
        warn!(?category, product_id, "line item references unknown product; excluded from aggregates");
        DataGapWarning {
            category,
            product_id: product_id.to_string(),
            message: format!("Product '{}' not found in catalog; line item excluded", product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTOR: EmissionFactor = EmissionFactor {
        mtco2e_per_lb: 0.001,
        water_gal_per_lb: 2.0,
    };

    #[test]
    fn test_for_units() {
        let impact = ImpactTotals::for_units(100.0, 50.0, Pounds(0.5), FACTOR);
        assert_eq!(impact.weight_lbs, 50.0);
        assert!((impact.ghg_mtco2e - 0.05).abs() < 1e-12);
        assert_eq!(impact.water_gal, 100.0);
    }

    #[test]
    fn test_category_record_groups_materials() {
        let mut totals = CategoryTotals::default();
        let impact = ImpactTotals::for_units(10.0, 5.0, Pounds(1.0), FACTOR);
        totals.record("PET", &impact);
        totals.record(" pet", &impact);
        totals.record("Glass", &impact);
        assert_eq!(totals.by_material.len(), 2);
        assert_eq!(totals.by_material["pet"].units, 20.0);
        assert_eq!(totals.totals.units, 30.0);
        assert_eq!(totals.scaled(0.5).by_material["glass"].cost, 2.5);
    }

    #[test]
    fn test_comparison() {
        let c = Comparison::new(100.0, 60.0);
        assert_eq!(c.change, -40.0);
        assert_eq!(c.reduction(), 40.0);
    }
}
