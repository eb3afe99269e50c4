//! # Aggregate Results
//!
//! Composes the category calculators into the reports collaborators consume:
//!
//! - [`environmental`] - GHG, water and waste, baseline vs forecast
//! - [`financial`] - purchasing, dishwashing, hauling, labor and other costs
//! - [`summary`] - a condensed, rounded cross-section for dashboards
//!
//! [`CategoryResults`] runs every category calculator once; the aggregates are
//! built from it so a project is only walked a single time.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::aggregate::calculate_project;
//! use impact_core::catalog::ProductCatalog;
//! use impact_core::inventory::ProjectInventory;
//! use impact_core::settings::EngineSettings;
//!
//! let inventory = ProjectInventory::for_state("OR");
//! let results = calculate_project(&inventory, &ProductCatalog::new(), &EngineSettings::default()).unwrap();
//! assert_eq!(results.financial.annual_savings, 0.0);
//! ```

pub mod environmental;
pub mod financial;
pub mod summary;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculators::{
    bottle_station, dishwasher, reusable, single_use, transportation, BottleStationResults, DataGapWarning,
    DishwashingResults, ReusableResults, SingleUseResults,
};
use crate::catalog::ProductCatalog;
use crate::errors::CalcResult;
use crate::inventory::ProjectInventory;
use crate::settings::EngineSettings;

pub use environmental::EnvironmentalResults;
pub use financial::FinancialResults;
pub use summary::AnnualSummary;

/// Every category calculator's output for one inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResults {
    pub single_use: SingleUseResults,
    pub reusable: ReusableResults,
    pub bottle_station: BottleStationResults,
    pub dishwashing: DishwashingResults,
    pub transportation_ghg_mtco2e: f64,
}

impl CategoryResults {
    /// Run every category calculator.
    ///
    /// Fails on any configuration error (utility source, region, emission
    /// factor, dishwasher profile). Unknown product ids only produce warnings.
    pub fn calculate(
        inventory: &ProjectInventory,
        catalog: &ProductCatalog,
        settings: &EngineSettings,
    ) -> CalcResult<Self> {
        let rates = inventory.resolve_utility_rates()?;

        let single_use = single_use::calculate(&inventory.single_use_items, catalog)?;
        let reusable = reusable::calculate(&inventory.reusable_items, catalog, settings.round_return_rate)?;
        let bottle_station = bottle_station::calculate(
            &inventory.reusable_items,
            inventory.bottle_station_usage.as_ref(),
            catalog,
        )?;
        let dishwashing = dishwasher::calculate_all(&rates, &inventory.dishwashers)?;
        let transportation_ghg_mtco2e =
            transportation::calculate(&reusable.item_weights, &inventory.transportation_costs).0;

        Ok(CategoryResults {
            single_use,
            reusable,
            bottle_station,
            dishwashing,
            transportation_ghg_mtco2e,
        })
    }

    /// Data-gap warnings from every category
    pub fn warnings(&self) -> Vec<DataGapWarning> {
        self.single_use
            .warnings
            .iter()
            .chain(self.reusable.warnings.iter())
            .cloned()
            .collect()
    }
}

/// The full set of aggregate reports for one inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResults {
    pub environmental: EnvironmentalResults,
    pub financial: FinancialResults,
    pub annual_summary: AnnualSummary,
    #[serde(default)]
    pub warnings: Vec<DataGapWarning>,
}

/// Calculate every aggregate report for an inventory.
///
/// # Returns
///
/// * `Ok(ProjectResults)` - environmental, financial and summary reports
/// * `Err(CalcError)` - a configuration error; nothing is defaulted
pub fn calculate_project(
    inventory: &ProjectInventory,
    catalog: &ProductCatalog,
    settings: &EngineSettings,
) -> CalcResult<ProjectResults> {
    let categories = CategoryResults::calculate(inventory, catalog, settings)?;

    let environmental = EnvironmentalResults::from_categories(&categories);
    let financial = FinancialResults::from_categories(inventory, &categories);
    let annual_summary = AnnualSummary::from_results(inventory, &environmental, &financial);
    let warnings = categories.warnings();

    debug!(
        annual_savings = financial.annual_savings,
        ghg_change = environmental.annual_ghg.change,
        warnings = warnings.len(),
        "project calculated"
    );

    Ok(ProjectResults {
        environmental,
        financial,
        annual_summary,
        warnings,
    })
}
