//! Per-metric comparison of expected against actual values.

use serde::{Deserialize, Deserializer, Serialize};

use super::flatten::Metrics;

/// One compared metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDiff {
    pub path: String,
    pub expected: f64,
    pub actual: f64,
    pub absolute_diff: f64,
    /// Fractional deviation from `expected`; infinite (JSON `null`) when
    /// `expected` is 0 and `actual` is not
    #[serde(deserialize_with = "deserialize_percent")]
    pub percent_diff: f64,
    pub passed: bool,
}

fn deserialize_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl MetricDiff {
    /// Compare one metric. The tolerance boundary is inclusive.
    pub fn compute(path: impl Into<String>, expected: f64, actual: f64, tolerance: f64) -> Self {
        let absolute_diff = (actual - expected).abs();
        let percent_diff = if expected == 0.0 {
            if actual == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            absolute_diff / expected.abs()
        };

        MetricDiff {
            path: path.into(),
            expected,
            actual,
            absolute_diff,
            percent_diff,
            passed: percent_diff <= tolerance,
        }
    }
}

/// Diff every expected path; absent actual values count as 0.
pub fn diff_metrics(expected: &Metrics, actual: &Metrics, tolerance: f64) -> Vec<MetricDiff> {
    expected
        .iter()
        .map(|(path, &value)| MetricDiff::compute(path.as_str(), value, actual.get(path).copied().unwrap_or(0.0), tolerance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_boundary() {
        let d = MetricDiff::compute("x", 0.0, 0.0, 0.0);
        assert_eq!(d.percent_diff, 0.0);
        assert!(d.passed);

        let d = MetricDiff::compute("x", 0.0, 5.0, 0.5);
        assert!(d.percent_diff.is_infinite());
        assert_eq!(d.absolute_diff, 5.0);
        assert!(!d.passed);
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(MetricDiff::compute("x", 100.0, 102.0, 0.02).passed);
        assert!(!MetricDiff::compute("x", 100.0, 103.0, 0.02).passed);
        // Relative to |expected|
        let d = MetricDiff::compute("x", -50.0, -51.0, 0.02);
        assert!((d.percent_diff - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_missing_actual_defaults_to_zero() {
        let expected = Metrics::from([("a".to_string(), 4.0), ("b".to_string(), 0.0)]);
        let actual = Metrics::from([("c".to_string(), 9.0)]);
        let diffs = diff_metrics(&expected, &actual, 0.01);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].actual, 0.0);
        assert!(!diffs[0].passed);
        assert!(diffs[1].passed);
    }

    #[test]
    fn test_infinite_percent_as_null() {
        let d = MetricDiff::compute("x", 0.0, 1.0, 0.01);
        let json = serde_json::to_value(&d).unwrap();
        assert!(json["percent_diff"].is_null());
        let back: MetricDiff = serde_json::from_value(json).unwrap();
        assert!(back.percent_diff.is_infinite());
    }
}
