//! Training Run History
//!
//! This module provides the record schema and the file-backed store for
//! run history. Each completed training run becomes one [`RunRecord`],
//! persisted as a single JSON line in the history log and read back in
//! append order.
//!
//! ## Schema Overview
//!
//! ```text
//! HistoryStore (1 log file) ──< RunRecord (N lines, append order)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use historial::history::{HistoryStore, RunRecord};
//! use serde_json::json;
//!
//! let store = HistoryStore::new("training_history.jsonl");
//!
//! // One record per completed run
//! let record = RunRecord::builder()
//!     .param("lr", json!(0.01))
//!     .param("batch_size", json!(32))
//!     .metric("acc", json!(0.93))
//!     .history(json!({"loss": [0.9, 0.4, 0.2]}))
//!     .model_path("final", "models/run_final.bin")
//!     .build();
//! store.append(&record)?;
//!
//! // Everything recorded so far, oldest first
//! let runs = store.load()?;
//! assert!(!runs.is_empty());
//! # Ok::<(), historial::Error>(())
//! ```

mod run_record;
mod store;

pub use run_record::{JsonMap, RunRecord, RunRecordBuilder};
pub use store::{HistoryStore, DEFAULT_HISTORY_PATH};
