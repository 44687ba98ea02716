//! Run Record - one immutable entry describing a completed training run

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object type carried by the opaque `params` and `metrics` payloads.
pub type JsonMap = serde_json::Map<String, Value>;

/// Run Record describes one completed training run.
///
/// A record is created once, stamped with the writer's UTC clock, and
/// never mutated. The four payload fields are opaque to the store: it
/// performs no validation of their internal structure beyond requiring
/// that they serialize as JSON.
///
/// ## Wire Format
///
/// Serializes to the JSONL line layout, one object per line:
///
/// ```text
/// {"timestamp": "...", "params": {...}, "metrics": {...},
///  "history": <any>, "model_paths": {"name": "path"}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    timestamp: DateTime<Utc>,
    params: JsonMap,
    metrics: JsonMap,
    history: Value,
    model_paths: HashMap<String, String>,
}

impl RunRecord {
    /// Create a new run record stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `params` - hyperparameters and configuration used for the run
    /// * `metrics` - final evaluation metrics (mae, rmse, accuracy, ...)
    /// * `history` - per-epoch curves or any other JSON value; pass
    ///   `Value::Null` when there is none
    /// * `model_paths` - saved model file paths by logical name
    ///   (e.g. `{"final": ..., "best": ...}`); paths are never opened
    ///   or validated
    #[must_use]
    pub fn new(
        params: JsonMap,
        metrics: JsonMap,
        history: Value,
        model_paths: HashMap<String, String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            params,
            metrics,
            history,
            model_paths,
        }
    }

    /// Create a builder for assembling a record field by field.
    #[must_use]
    pub fn builder() -> RunRecordBuilder {
        RunRecordBuilder::new()
    }

    /// Get the timestamp assigned when the record was created.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Get the hyperparameter payload.
    #[must_use]
    pub const fn params(&self) -> &JsonMap {
        &self.params
    }

    /// Get the final-metrics payload.
    #[must_use]
    pub const fn metrics(&self) -> &JsonMap {
        &self.metrics
    }

    /// Get the training-history payload (`Value::Null` when none was
    /// recorded).
    #[must_use]
    pub const fn history(&self) -> &Value {
        &self.history
    }

    /// Get the saved model paths by logical artifact name.
    #[must_use]
    pub const fn model_paths(&self) -> &HashMap<String, String> {
        &self.model_paths
    }
}

/// Builder for [`RunRecord`].
#[derive(Debug)]
pub struct RunRecordBuilder {
    timestamp: DateTime<Utc>,
    params: JsonMap,
    metrics: JsonMap,
    history: Value,
    model_paths: HashMap<String, String>,
}

impl RunRecordBuilder {
    /// Create a new builder with empty payloads and the current UTC time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            params: JsonMap::new(),
            metrics: JsonMap::new(),
            history: Value::Null,
            model_paths: HashMap::new(),
        }
    }

    /// Add a single hyperparameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Replace the whole hyperparameter payload.
    #[must_use]
    pub fn params(mut self, params: JsonMap) -> Self {
        self.params = params;
        self
    }

    /// Add a single final metric.
    #[must_use]
    pub fn metric(mut self, name: impl Into<String>, value: Value) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Replace the whole metrics payload.
    #[must_use]
    pub fn metrics(mut self, metrics: JsonMap) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the training-history payload (any JSON shape).
    #[must_use]
    pub fn history(mut self, history: Value) -> Self {
        self.history = history;
        self
    }

    /// Add one saved model path by logical artifact name.
    #[must_use]
    pub fn model_path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.model_paths.insert(name.into(), path.into());
        self
    }

    /// Replace the whole model-paths payload.
    #[must_use]
    pub fn model_paths(mut self, model_paths: HashMap<String, String>) -> Self {
        self.model_paths = model_paths;
        self
    }

    /// Set a custom timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Build the [`RunRecord`].
    #[must_use]
    pub fn build(self) -> RunRecord {
        RunRecord {
            timestamp: self.timestamp,
            params: self.params,
            metrics: self.metrics,
            history: self.history,
            model_paths: self.model_paths,
        }
    }
}

impl Default for RunRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_record_new() {
        let mut params = JsonMap::new();
        params.insert("lr".to_string(), json!(0.01));
        let mut metrics = JsonMap::new();
        metrics.insert("acc".to_string(), json!(0.9));

        let record = RunRecord::new(params, metrics, Value::Null, HashMap::new());

        assert_eq!(record.params().get("lr"), Some(&json!(0.01)));
        assert_eq!(record.metrics().get("acc"), Some(&json!(0.9)));
        assert!(record.history().is_null());
        assert!(record.model_paths().is_empty());
        assert!(record.timestamp().timestamp() > 0);
    }

    #[test]
    fn test_builder_defaults() {
        let record = RunRecord::builder().build();

        assert!(record.params().is_empty());
        assert!(record.metrics().is_empty());
        assert!(record.history().is_null());
        assert!(record.model_paths().is_empty());
    }

    #[test]
    fn test_builder_accumulates_fields() {
        let record = RunRecord::builder()
            .param("lr", json!(0.02))
            .param("optimizer", json!("adam"))
            .metric("rmse", json!(1.25))
            .history(json!([0.6, 0.8, 0.95]))
            .model_path("best", "models/best.bin")
            .build();

        assert_eq!(record.params().len(), 2);
        assert_eq!(record.metrics().get("rmse"), Some(&json!(1.25)));
        assert_eq!(record.history(), &json!([0.6, 0.8, 0.95]));
        assert_eq!(
            record.model_paths().get("best").map(String::as_str),
            Some("models/best.bin")
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = RunRecord::builder()
            .param("lr", json!(0.01))
            .metric("acc", json!(0.9))
            .history(json!({"loss": [0.9, 0.3]}))
            .model_path("final", "w.bin")
            .build();

        let json = serde_json::to_string(&record).expect("serialization failed");
        let deserialized: RunRecord = serde_json::from_str(&json).expect("deserialization failed");

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_wire_field_names() {
        let record = RunRecord::builder().build();
        let value = serde_json::to_value(&record).expect("serialization failed");
        let object = value.as_object().expect("record must serialize to an object");

        for field in ["timestamp", "params", "metrics", "history", "model_paths"] {
            assert!(object.contains_key(field), "missing wire field {field}");
        }
        assert_eq!(object.len(), 5);
    }
}
