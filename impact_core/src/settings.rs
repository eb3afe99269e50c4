//! Engine settings.
//!
//! Settings shared by every calculation in a run. They serialize to JSON, so a
//! front end can keep them next to its datasets and load them with
//! `serde_json`.

use serde::{Deserialize, Serialize};

/// Default regression tolerance (1%) applied when capturing a golden dataset.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Calculation-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Round the computed return rate itself to 2 decimals.
    /// The shrinkage rate is always rounded.
    pub round_return_rate: bool,

    /// Tolerance stamped onto newly captured golden datasets
    pub default_tolerance: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            round_return_rate: false,
            default_tolerance: DEFAULT_TOLERANCE,
        }
    }
}
