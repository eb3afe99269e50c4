//! # Single-Use Purchasing
//!
//! Annual units, cost, weight, GHG and water of single-use purchases, today
//! (baseline) and after the switch to reusables (forecast).
//!
//! Each line item is annualized with its frequency:
//!
//! ```text
//! units  = cases × units_per_case × occurrences/yr
//! cost   = cases × case_cost × occurrences/yr
//! weight = units × unit_weight_lbs
//! ghg    = weight × mtco2e_per_lb(material)
//! water  = weight × water_gal_per_lb(material)
//! ```
//!
//! Line items whose product id is missing from the catalog are skipped with a
//! [`DataGapWarning`]. A product whose material has no emission factor is an
//! error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::constants::emission_factor;
use crate::errors::CalcResult;
use crate::inventory::SingleUseLineItem;

use super::{CategoryTotals, DataGapWarning, ImpactTotals, LineItemCategory};

/// Single-use purchasing, baseline vs forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleUseResults {
    pub baseline: CategoryTotals,
    pub forecast: CategoryTotals,
    /// forecast - baseline
    pub change: ImpactTotals,
    #[serde(default)]
    pub warnings: Vec<DataGapWarning>,
}

/// Calculate single-use purchasing impacts.
pub fn calculate(items: &[SingleUseLineItem], catalog: &ProductCatalog) -> CalcResult<SingleUseResults> {
    let mut results = SingleUseResults::default();

    for item in items {
        let Some(product) = catalog.single_use_product(&item.product_id) else {
            results
                .warnings
                .push(DataGapWarning::unresolved_product(LineItemCategory::SingleUse, &item.product_id));
            continue;
        };

        let factor = emission_factor(&product.material)?;
        let unit_weight = product.unit_weight_lbs();
        let occurrences = item.frequency.annual_occurrence();

        let case_cost = item.case_cost.unwrap_or(product.case_cost);
        let new_case_cost = item.new_case_cost.unwrap_or(case_cost);

        let baseline = ImpactTotals::for_units(
            item.cases_purchased * product.units_per_case * occurrences,
            item.cases_purchased * case_cost * occurrences,
            unit_weight,
            factor,
        );
        let forecast = ImpactTotals::for_units(
            item.new_cases_purchased * product.units_per_case * occurrences,
            item.new_cases_purchased * new_case_cost * occurrences,
            unit_weight,
            factor,
        );

        results.baseline.record(&product.material, &baseline);
        results.forecast.record(&product.material, &forecast);
    }

    results.change = results.forecast.totals.minus(&results.baseline.totals);

    debug!(
        baseline_units = results.baseline.totals.units,
        forecast_units = results.forecast.totals.units,
        skipped = results.warnings.len(),
        "single-use purchasing"
    );

    Ok(results)
}
