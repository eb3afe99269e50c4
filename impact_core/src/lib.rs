//! # impact_core - Reusable Foodware Impact Engine
//!
//! `impact_core` projects the environmental and financial effect of replacing
//! single-use foodware with reusables. It takes a normalized
//! [`ProjectInventory`] (purchasing, dishwashing, freight, labor and other
//! operating data) and produces baseline vs forecast GHG, water, waste and
//! cost reports. A golden-dataset harness checks those numbers against stored
//! expectations.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable snapshots
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Loud lookups**: Unknown regions, materials and dishwasher models are errors, never zeros
//! - **Explicit catalog**: Product data is passed in, not read from a global
//!
//! ## Quick Start
//!
//! ```rust
//! use impact_core::{calculate_project, EngineSettings, ProductCatalog, ProjectInventory};
//! use impact_core::catalog::CatalogProduct;
//! use impact_core::frequency::Frequency;
//! use impact_core::inventory::SingleUseLineItem;
//! use impact_core::units::WeightUnit;
//!
//! let catalog = ProductCatalog::new().with_single_use(CatalogProduct {
//!     id: "cup-12oz".to_string(),
//!     description: "12 oz paper cup".to_string(),
//!     material: "paper".to_string(),
//!     unit_weight: 0.4,
//!     weight_unit: WeightUnit::Ounce,
//!     units_per_case: 1000.0,
//!     case_cost: 85.0,
//! });
//!
//! let mut inventory = ProjectInventory::for_state("OR");
//! inventory.single_use_items.push(SingleUseLineItem {
//!     product_id: "cup-12oz".to_string(),
//!     frequency: Frequency::Monthly,
//!     cases_purchased: 2.0,
//!     case_cost: None,
//!     new_cases_purchased: 0.0,
//!     new_case_cost: None,
//! });
//!
//! let results = calculate_project(&inventory, &catalog, &EngineSettings::default()).unwrap();
//! assert_eq!(results.financial.annual_savings, 2.0 * 85.0 * 12.0);
//! assert!(results.environmental.annual_ghg.reduction() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`inventory`] - Project inventory snapshot and line items
//! - [`catalog`] - Product catalog (material, weight, price per product id)
//! - [`constants`] - Emission factors, utility rates and dishwasher profiles
//! - [`calculators`] - Per-category calculators
//! - [`aggregate`] - Environmental, financial and summary reports
//! - [`regression`] - Golden-dataset regression harness
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod aggregate;
pub mod calculators;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod frequency;
pub mod inventory;
pub mod regression;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aggregate::{calculate_project, AnnualSummary, EnvironmentalResults, FinancialResults, ProjectResults};
pub use catalog::ProductCatalog;
pub use errors::{CalcError, CalcResult};
pub use inventory::ProjectInventory;
pub use regression::{BatchRunReport, GoldenDataset, RegressionHarness, TestRunnerResult};
pub use settings::EngineSettings;
