//! Golden dataset records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use crate::inventory::ProjectInventory;

use super::RegressionHarness;

/// Current golden dataset schema version
pub const SCHEMA_VERSION: &str = "1.0";

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_active() -> bool {
    true
}

/// What a golden dataset exercises. Used for filtering and reporting only;
/// every dataset is recomputed through the full project calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetCategory {
    #[default]
    Project,
    SingleUse,
    Reusable,
    Dishwashing,
    BottleStation,
    Transportation,
}

impl DatasetCategory {
    pub const ALL: [DatasetCategory; 6] = [
        DatasetCategory::Project,
        DatasetCategory::SingleUse,
        DatasetCategory::Reusable,
        DatasetCategory::Dishwashing,
        DatasetCategory::BottleStation,
        DatasetCategory::Transportation,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DatasetCategory::Project => "project",
            DatasetCategory::SingleUse => "single_use",
            DatasetCategory::Reusable => "reusable",
            DatasetCategory::Dishwashing => "dishwashing",
            DatasetCategory::BottleStation => "bottle_station",
            DatasetCategory::Transportation => "transportation",
        }
    }
}

impl fmt::Display for DatasetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DatasetCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        DatasetCategory::ALL
            .into_iter()
            .find(|c| c.code() == key)
            .ok_or_else(|| CalcError::invalid_input("category", s, "unknown dataset category"))
    }
}

/// A captured (inputs, expected outputs, tolerance) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenDataset {
    pub id: String,
    #[serde(default)]
    pub category: DatasetCategory,
    /// Serialized `ProjectInventory`
    pub inputs: Value,
    /// Serialized `ProjectResults`
    pub expected_outputs: Value,
    /// Maximum fractional deviation per metric
    pub tolerance: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
}

impl GoldenDataset {
    /// Capture a dataset from a live run so it reproduces itself.
    ///
    /// Uses the harness settings' `default_tolerance`.
    pub fn capture(
        id: impl Into<String>,
        category: DatasetCategory,
        inventory: &ProjectInventory,
        harness: &RegressionHarness,
    ) -> CalcResult<Self> {
        let results = harness.calculate(inventory)?;
        Ok(GoldenDataset {
            id: id.into(),
            category,
            inputs: serde_json::to_value(inventory)?,
            expected_outputs: serde_json::to_value(&results)?,
            tolerance: harness.settings.default_tolerance,
            tags: Vec::new(),
            is_active: true,
            schema_version: default_schema_version(),
        })
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check the dataset can be replayed by this version of the engine.
    pub fn validate(&self) -> CalcResult<()> {
        validate_version(&self.schema_version)?;
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(CalcError::invalid_input(
                "tolerance",
                self.tolerance.to_string(),
                "must be a non-negative fraction",
            ));
        }
        Ok(())
    }

    /// Deserialize the stored inputs.
    pub fn inventory(&self) -> CalcResult<ProjectInventory> {
        Ok(serde_json::from_value(self.inputs.clone())?)
    }
}

/// Major version must match; a newer minor version is rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse().map_err(|_| mismatch()))
        .collect::<CalcResult<_>>()?;
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    match (file_parts.first(), current_parts.first()) {
        (Some(file_major), Some(current_major)) if file_major == current_major => {}
        _ => return Err(mismatch()),
    }

    if file_parts.get(1).copied().unwrap_or(0) > current_parts.get(1).copied().unwrap_or(0) {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("single-use".parse::<DatasetCategory>().unwrap(), DatasetCategory::SingleUse);
        assert_eq!("Dishwashing".parse::<DatasetCategory>().unwrap(), DatasetCategory::Dishwashing);
        assert!("laundry".parse::<DatasetCategory>().is_err());
        for c in DatasetCategory::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.code()));
        }
    }

    #[test]
    fn test_defaults_on_deserialize() {
        let json = r#"{"id": "g1", "inputs": {}, "expected_outputs": {}, "tolerance": 0.01}"#;
        let dataset: GoldenDataset = serde_json::from_str(json).unwrap();
        assert!(dataset.is_active);
        assert_eq!(dataset.schema_version, SCHEMA_VERSION);
        assert_eq!(dataset.category, DatasetCategory::Project);
        assert!(dataset.tags.is_empty());
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("1.0").is_ok());
        assert!(validate_version("1").is_ok());
        assert!(matches!(validate_version("2.0"), Err(CalcError::VersionMismatch { .. })));
        assert!(matches!(validate_version("1.5"), Err(CalcError::VersionMismatch { .. })));
        assert!(matches!(validate_version("beta"), Err(CalcError::VersionMismatch { .. })));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let dataset = GoldenDataset {
            id: "g".to_string(),
            category: DatasetCategory::Project,
            inputs: Value::Null,
            expected_outputs: Value::Null,
            tolerance: -0.1,
            tags: vec![],
            is_active: true,
            schema_version: default_schema_version(),
        };
        assert_eq!(dataset.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
