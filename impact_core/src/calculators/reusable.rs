//! # Reusable Purchasing
//!
//! Reusables are bought once (the initial purchase) and then topped up each
//! year to replace units that are not returned. The annual replacement is the
//! initial purchase scaled by the shrinkage rate from
//! [`return_rate`](super::return_rate).
//!
//! The bottle-station item (any line whose product id is in the bottle-station
//! catalog) is excluded here and handled by
//! [`bottle_station`](super::bottle_station).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::constants::emission_factor;
use crate::errors::CalcResult;
use crate::inventory::ReusableLineItem;
use crate::units::Pounds;

use super::return_rate::{self, ReturnRateSummary};
use super::{CategoryTotals, DataGapWarning, ImpactTotals, LineItemCategory};

/// Reusable purchasing: one-time purchase plus yearly replacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReusableResults {
    pub initial_purchase: CategoryTotals,
    pub annual_replacement: CategoryTotals,
    pub return_rate: ReturnRateSummary,
    /// Purchased weight of each resolved line item, for freight emissions
    #[serde(skip)]
    pub item_weights: Vec<Pounds>,
    #[serde(default)]
    pub warnings: Vec<DataGapWarning>,
}

/// Calculate reusable purchasing impacts.
pub fn calculate(
    items: &[ReusableLineItem],
    catalog: &ProductCatalog,
    round_return_rate: bool,
) -> CalcResult<ReusableResults> {
    let return_rate = return_rate::calculate(items, |item| catalog.is_bottle_station(&item.product_id), round_return_rate);

    let mut initial_purchase = CategoryTotals::default();
    let mut item_weights = Vec::new();
    let mut warnings = Vec::new();

    for item in items.iter().filter(|item| !catalog.is_bottle_station(&item.product_id)) {
        let Some(product) = catalog.reusable_product(&item.product_id) else {
            warnings.push(DataGapWarning::unresolved_product(LineItemCategory::Reusable, &item.product_id));
            continue;
        };

        let factor = emission_factor(&product.material)?;
        let case_cost = item.case_cost.unwrap_or(product.case_cost);

        let impact = ImpactTotals::for_units(
            item.cases_purchased * product.units_per_case,
            item.cases_purchased * case_cost,
            product.unit_weight_lbs(),
            factor,
        );

        item_weights.push(Pounds(impact.weight_lbs));
        initial_purchase.record(&product.material, &impact);
    }

    let annual_replacement = initial_purchase.scaled(return_rate.shrinkage_rate / 100.0);

    debug!(
        initial_units = initial_purchase.totals.units,
        shrinkage_rate = return_rate.shrinkage_rate,
        replacement_units = annual_replacement.totals.units,
        "reusable purchasing"
    );

    Ok(ReusableResults {
        initial_purchase,
        annual_replacement,
        return_rate,
        item_weights,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BottleStationProduct, CatalogProduct};
    use crate::units::WeightUnit;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new()
            .with_reusable(CatalogProduct {
                id: "tumbler".to_string(),
                description: "16 oz tumbler".to_string(),
                material: "polypropylene".to_string(),
                unit_weight: 4.0,
                weight_unit: WeightUnit::Ounce,
                units_per_case: 24.0,
                case_cost: 60.0,
            })
            .with_bottle_station(BottleStationProduct {
                id: "station".to_string(),
                description: String::new(),
                units_per_case: 1.0,
                case_cost: 1500.0,
                replaced_bottle_material: "PET".to_string(),
                replaced_bottle_unit_weight: 0.5,
                weight_unit: WeightUnit::Ounce,
                replaced_bottle_unit_cost: 0.3,
            })
    }

    fn line(product_id: &str, cases: f64, returned: f64, issued: f64) -> ReusableLineItem {
        ReusableLineItem {
            product_id: product_id.to_string(),
            cases_purchased: cases,
            case_cost: None,
            reusable_return_percentage: 0.0,
            reusable_return_count: returned,
            reusable_item_count: issued,
        }
    }

    #[test]
    fn test_initial_purchase_and_replacement() {
        let items = [line("tumbler", 10.0, 90.0, 100.0)];
        let results = calculate(&items, &catalog(), false).unwrap();

        assert_eq!(results.initial_purchase.totals.units, 240.0);
        assert_eq!(results.initial_purchase.totals.cost, 600.0);
        // 240 * 4 oz = 60 lb
        assert_eq!(results.initial_purchase.totals.weight_lbs, 60.0);
        assert_eq!(results.item_weights, vec![Pounds(60.0)]);

        assert_eq!(results.return_rate.return_rate, 90.0);
        assert_eq!(results.return_rate.shrinkage_rate, 10.0);
        assert!((results.annual_replacement.totals.units - 24.0).abs() < 1e-9);
        assert!((results.annual_replacement.totals.cost - 60.0).abs() < 1e-9);
        assert!((results.annual_replacement.by_material["polypropylene"].weight_lbs - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_return_means_no_replacement() {
        let items = [line("tumbler", 5.0, 0.0, 0.0)];
        let results = calculate(&items, &catalog(), false).unwrap();
        assert_eq!(results.return_rate.return_rate, 100.0);
        assert_eq!(results.annual_replacement.totals.units, 0.0);
    }

    #[test]
    fn test_over_return_never_credits_replacement() {
        let items = [line("tumbler", 10.0, 300.0, 100.0)];
        let results = calculate(&items, &catalog(), false).unwrap();
        assert_eq!(results.return_rate.shrinkage_rate, 0.0);
        assert_eq!(results.annual_replacement.totals.cost, 0.0);
        assert_eq!(results.annual_replacement.totals.weight_lbs, 0.0);
    }

    #[test]
    fn test_bottle_station_is_excluded() {
        let items = [line("tumbler", 1.0, 0.0, 0.0), line("station", 2.0, 0.0, 0.0)];
        let results = calculate(&items, &catalog(), false).unwrap();
        assert_eq!(results.initial_purchase.totals.units, 24.0);
        assert!(results.warnings.is_empty());
        assert_eq!(results.item_weights.len(), 1);
    }

    #[test]
    fn test_unknown_reusable_is_warning() {
        let items = [line("ghost", 1.0, 0.0, 0.0)];
        let results = calculate(&items, &catalog(), false).unwrap();
        assert_eq!(results.initial_purchase.totals, ImpactTotals::default());
        assert_eq!(results.warnings.len(), 1);
        assert_eq!(results.warnings[0].category, LineItemCategory::Reusable);
    }

    #[test]
    fn test_item_weights_not_serialized() {
        let items = [line("tumbler", 1.0, 0.0, 0.0)];
        let results = calculate(&items, &catalog(), false).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("item_weights").is_none());
        assert!(json.get("return_rate").is_some());
    }
}
