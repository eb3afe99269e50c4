//! # Golden-Dataset Regression Harness
//!
//! A [`GoldenDataset`] pairs a serialized inventory with the results it is
//! expected to produce. The harness recomputes the results, flattens both
//! sides into `path -> number` metrics and compares each expected path within
//! the dataset's fractional tolerance.
//!
//! Recompute failures (bad inputs, configuration errors, schema mismatch,
//! panics) are reported as failed results. A batch always returns one result
//! per active dataset.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::inventory::ProjectInventory;
//! use impact_core::regression::{DatasetCategory, GoldenDataset, RegressionHarness};
//!
//! let harness = RegressionHarness::default();
//! let inventory = ProjectInventory::for_state("WA");
//! let golden = GoldenDataset::capture("wa-empty", DatasetCategory::Project, &inventory, &harness).unwrap();
//!
//! let report = harness.run_batch(&[golden]);
//! assert!(report.all_passed());
//! ```

pub mod dataset;
pub mod diff;
pub mod flatten;
pub mod runner;

pub use dataset::{DatasetCategory, GoldenDataset, SCHEMA_VERSION};
pub use diff::MetricDiff;
pub use flatten::{flatten, MetricNode, Metrics};
pub use runner::{BatchRunReport, RegressionHarness, TestRunnerResult};
