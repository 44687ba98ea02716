//! # Historial: Append-Only Training Run History
//!
//! Historial records metadata for completed ML training runs
//! (hyperparameters, final metrics, per-epoch history curves, model
//! artifact paths) as one self-contained JSON object per line in a
//! persistent JSONL log, and reads the whole log back in append order.
//!
//! ## Design Principles
//!
//! - **Append-only**: records are never mutated or deleted
//! - **Opaque payloads**: `params`, `metrics`, and `history` carry
//!   arbitrary JSON; no schema is enforced beyond serializability
//! - **Explicit log path**: the file location is a constructor argument,
//!   never hidden global state, so stores are testable in isolation
//! - **Fail loudly**: a malformed stored line aborts `load` with its
//!   line number instead of being silently skipped
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use historial::{HistoryStore, RunRecord};
//! use serde_json::json;
//!
//! let store = HistoryStore::new("training_history.jsonl");
//!
//! // Record a completed run
//! let record = RunRecord::builder()
//!     .param("lr", json!(0.01))
//!     .metric("acc", json!(0.9))
//!     .history(json!([0.5, 0.7, 0.9]))
//!     .model_path("weights", "models/w.bin")
//!     .build();
//! store.append(&record)?;
//!
//! // Inspect every run recorded so far, oldest first
//! for run in store.load()? {
//!     println!("{}: {:?}", run.timestamp(), run.metrics());
//! }
//! # Ok::<(), historial::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod history;

pub use error::{Error, Result};
pub use history::{HistoryStore, JsonMap, RunRecord, RunRecordBuilder, DEFAULT_HISTORY_PATH};
