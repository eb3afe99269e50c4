//! Replay golden datasets against the current engine.

use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::aggregate::{calculate_project, ProjectResults};
use crate::catalog::ProductCatalog;
use crate::errors::{CalcError, CalcResult};
use crate::inventory::ProjectInventory;
use crate::settings::EngineSettings;

use super::dataset::GoldenDataset;
use super::diff::{diff_metrics, MetricDiff};
use super::flatten::{flatten, Metrics};

/// Outcome of replaying one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRunnerResult {
    pub dataset_id: String,
    pub passed: bool,
    pub actual_outputs: Metrics,
    pub diff: Vec<MetricDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TestRunnerResult {
    fn failed(dataset_id: &str, message: String) -> Self {
        TestRunnerResult {
            dataset_id: dataset_id.to_string(),
            passed: false,
            actual_outputs: Metrics::new(),
            diff: Vec::new(),
            error_message: Some(message),
        }
    }

    /// Diffs outside tolerance
    pub fn failures(&self) -> impl Iterator<Item = &MetricDiff> {
        self.diff.iter().filter(|d| !d.passed)
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<TestRunnerResult>,
    pub passed: usize,
    pub failed: usize,
    /// Ids of inactive datasets
    pub skipped: Vec<String>,
}

impl BatchRunReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Recomputes datasets with a fixed catalog and settings.
#[derive(Debug, Clone, Default)]
pub struct RegressionHarness {
    pub catalog: ProductCatalog,
    pub settings: EngineSettings,
}

impl RegressionHarness {
    pub fn new(catalog: ProductCatalog, settings: EngineSettings) -> Self {
        Self { catalog, settings }
    }

    /// Run the full project calculation.
    pub fn calculate(&self, inventory: &ProjectInventory) -> CalcResult<ProjectResults> {
        calculate_project(inventory, &self.catalog, &self.settings)
    }

    /// Replay one dataset.
    ///
    /// Never fails: errors and panics while recomputing become a failed
    /// result carrying `error_message`.
    #[instrument(level = "debug", skip_all, fields(dataset = %dataset.id))]
    pub fn run_dataset_test(&self, dataset: &GoldenDataset) -> TestRunnerResult {
        self.replay(dataset, &|inventory: &ProjectInventory| self.calculate(inventory))
    }

    /// Replay every active dataset in order.
    #[instrument(level = "info", skip_all, fields(datasets = datasets.len()))]
    pub fn run_batch(&self, datasets: &[GoldenDataset]) -> BatchRunReport {
        self.replay_batch(datasets, &|inventory: &ProjectInventory| self.calculate(inventory))
    }

    fn replay<F>(&self, dataset: &GoldenDataset, calculate: &F) -> TestRunnerResult
    where
        F: Fn(&ProjectInventory) -> CalcResult<ProjectResults>,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| recompute(dataset, calculate)))
            .unwrap_or_else(|payload| Err(CalcError::internal(panic_message(payload.as_ref()))));

        let actual = match outcome {
            Ok(actual) => actual,
            Err(e) => {
                warn!(dataset = %dataset.id, error_code = e.error_code(), "dataset could not be recomputed: {e}");
                return TestRunnerResult::failed(&dataset.id, e.to_string());
            }
        };

        let expected = flatten(&dataset.expected_outputs);
        let diff = diff_metrics(&expected, &actual, dataset.tolerance);
        let passed = diff.iter().all(|d| d.passed);
        debug!(dataset = %dataset.id, metrics = diff.len(), passed, "dataset compared");

        TestRunnerResult {
            dataset_id: dataset.id.clone(),
            passed,
            actual_outputs: actual,
            diff,
            error_message: None,
        }
    }

    fn replay_batch<F>(&self, datasets: &[GoldenDataset], calculate: &F) -> BatchRunReport
    where
        F: Fn(&ProjectInventory) -> CalcResult<ProjectResults>,
    {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        let (active, inactive): (Vec<&GoldenDataset>, Vec<&GoldenDataset>) =
            datasets.iter().partition(|d| d.is_active);
        let results: Vec<TestRunnerResult> = active.into_iter().map(|d| self.replay(d, calculate)).collect();
        let skipped: Vec<String> = inactive.into_iter().map(|d| d.id.clone()).collect();

        let passed = results.iter().filter(|r| r.passed).count();
        let failed = results.len() - passed;
        info!(%run_id, passed, failed, skipped = skipped.len(), "regression batch finished");

        BatchRunReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            results,
            passed,
            failed,
            skipped,
        }
    }
}

fn recompute<F>(dataset: &GoldenDataset, calculate: &F) -> CalcResult<Metrics>
where
    F: Fn(&ProjectInventory) -> CalcResult<ProjectResults>,
{
    dataset.validate()?;
    let inventory = dataset.inventory()?;
    let results = calculate(&inventory)?;
    Ok(flatten(&serde_json::to_value(&results)?))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("calculation panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("calculation panicked: {s}")
    } else {
        "calculation panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures;
    use crate::regression::dataset::DatasetCategory;
    use serde_json::json;

    fn harness() -> RegressionHarness {
        RegressionHarness::new(fixtures::catalog(), EngineSettings::default())
    }

    fn golden(id: &str) -> GoldenDataset {
        GoldenDataset::capture(id, DatasetCategory::Project, &fixtures::inventory(), &harness()).unwrap()
    }

    #[test]
    fn test_captured_dataset_reproduces_exactly() {
        let dataset = golden("fixture").with_tolerance(0.0);
        let result = harness().run_dataset_test(&dataset);
        assert!(result.passed, "{:?}", result.failures().collect::<Vec<_>>());
        assert!(result.error_message.is_none());
        assert!(!result.diff.is_empty());
        assert!(result.diff.iter().all(|d| d.percent_diff == 0.0));
        assert!(result.actual_outputs.contains_key("financial.annual_savings"));
    }

    #[test]
    fn test_drift_detected() {
        let mut dataset = golden("drift");
        let savings = dataset.expected_outputs["financial"]["annual_savings"].as_f64().unwrap();
        dataset.expected_outputs["financial"]["annual_savings"] = json!(savings * 1.5);

        let result = harness().run_dataset_test(&dataset);
        assert!(!result.passed);
        let failures: Vec<&str> = result.failures().map(|d| d.path.as_str()).collect();
        assert_eq!(failures, vec!["financial.annual_savings"]);
    }

    #[test]
    fn test_bad_inputs_become_failed_result() {
        let mut dataset = golden("bad");
        dataset.inputs = json!({"state": "CA", "labor_costs": "lots"});
        let result = harness().run_dataset_test(&dataset);
        assert!(!result.passed);
        assert!(result.actual_outputs.is_empty());
        assert!(result.diff.is_empty());
        assert!(result.error_message.is_some());
    }

    #[test]
    fn test_version_mismatch_becomes_failed_result() {
        let mut dataset = golden("future");
        dataset.schema_version = "2.0".to_string();
        let result = harness().run_dataset_test(&dataset);
        assert!(!result.passed);
        assert!(result.error_message.unwrap().contains("2.0"));
    }

    #[test]
    fn test_batch_resilience() {
        let mut datasets: Vec<GoldenDataset> = (0..5).map(|i| golden(&format!("g{i}"))).collect();
        datasets[2].inputs["state"] = json!("ZZ");

        let report = harness().run_batch(&datasets);
        assert_eq!(report.results.len(), 5);
        assert_eq!(report.passed, 4);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        let failed: Vec<&str> = report
            .results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.dataset_id.as_str())
            .collect();
        assert_eq!(failed, vec!["g2"]);
        assert!(report.results[2].error_message.as_ref().unwrap().contains("ZZ"));
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_inactive_datasets_skipped() {
        let mut datasets = vec![golden("on"), golden("off")];
        datasets[1].is_active = false;
        let report = harness().run_batch(&datasets);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.skipped, vec!["off".to_string()]);
        assert!(report.all_passed());
    }

    #[test]
    fn test_panicking_calculation_becomes_failed_result() {
        let harness = harness();
        let mut datasets: Vec<GoldenDataset> = (0..3).map(|i| golden(&format!("g{i}"))).collect();
        datasets[1].inputs["currency"] = json!("XXX");

        let calculate = |inventory: &ProjectInventory| {
            if inventory.currency == "XXX" {
                panic!("currency table exploded");
            }
            harness.calculate(inventory)
        };

        let result = harness.replay(&datasets[1], &calculate);
        assert!(!result.passed);
        assert!(result.actual_outputs.is_empty());
        assert!(result.diff.is_empty());
        let message = result.error_message.unwrap();
        assert!(message.contains("calculation panicked"), "{message}");
        assert!(message.contains("currency table exploded"));

        let report = harness.replay_batch(&datasets, &calculate);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.results[1].passed);
    }

    #[test]
    fn test_panic_message() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "calculation panicked: boom");
    }
}
