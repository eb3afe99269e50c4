//! Flatten nested results into `path -> number` metrics.
//!
//! Keys join with `.` and sequence elements append `[index]`, so
//! `{"a": {"b": [1, {"c": 2}]}}` becomes `a.b[0] = 1` and `a.b[1].c = 2`.
//! Text, booleans and nulls carry no metric and are dropped.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Flattened metrics, ordered by path
pub type Metrics = BTreeMap<String, f64>;

/// A JSON node classified for the flatten walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricNode<'a> {
    Number(f64),
    Sequence(&'a [Value]),
    Keyed(&'a Map<String, Value>),
    Other,
}

impl<'a> MetricNode<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(MetricNode::Other, MetricNode::Number),
            Value::Array(items) => MetricNode::Sequence(items),
            Value::Object(map) => MetricNode::Keyed(map),
            Value::String(_) | Value::Bool(_) | Value::Null => MetricNode::Other,
        }
    }
}

/// Flatten a JSON value into numeric metrics.
pub fn flatten(value: &Value) -> Metrics {
    let mut metrics = Metrics::new();
    walk(value, String::new(), &mut metrics);
    metrics
}

fn walk(value: &Value, path: String, metrics: &mut Metrics) {
    match MetricNode::classify(value) {
        MetricNode::Number(n) => {
            metrics.insert(path, n);
        }
        MetricNode::Keyed(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, child_path, metrics);
            }
        }
        MetricNode::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, format!("{path}[{index}]"), metrics);
            }
        }
        MetricNode::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_paths() {
        let metrics = flatten(&json!({
            "a": {"b": [1, {"c": 2.5}]},
            "total": 10
        }));
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics["a.b[0]"], 1.0);
        assert_eq!(metrics["a.b[1].c"], 2.5);
        assert_eq!(metrics["total"], 10.0);
    }

    #[test]
    fn test_non_numeric_dropped() {
        let metrics = flatten(&json!({
            "currency": "USD",
            "metric": false,
            "payback": null,
            "tags": ["x", "y"],
            "units": 4
        }));
        assert_eq!(metrics.keys().collect::<Vec<_>>(), vec!["units"]);
    }

    #[test]
    fn test_root_sequence() {
        let metrics = flatten(&json!([3, [4]]));
        assert_eq!(metrics["[0]"], 3.0);
        assert_eq!(metrics["[1][0]"], 4.0);
    }

    #[test]
    fn test_classify() {
        assert_eq!(MetricNode::classify(&json!(2)), MetricNode::Number(2.0));
        assert_eq!(MetricNode::classify(&json!("2")), MetricNode::Other);
        assert!(matches!(MetricNode::classify(&json!({})), MetricNode::Keyed(_)));
    }
}
