//! History Store - file-backed JSONL persistence for run records

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{JsonMap, RunRecord};
use crate::error::{Error, Result};

/// Default history file name, relative to the working directory.
pub const DEFAULT_HISTORY_PATH: &str = "training_history.jsonl";

/// File-backed append-only store for run records.
///
/// ## Design
///
/// One self-contained JSON object per line. [`HistoryStore::append`]
/// serializes the full line before any byte is written and issues a
/// single append-mode write, so a serialization failure never leaves a
/// partial line behind. [`HistoryStore::load`] streams the file line by
/// line and preserves append order, oldest first.
///
/// ## Concurrency
///
/// The store performs no inter-process locking. A single process
/// observes its own appends in order; concurrent appends from multiple
/// processes rely on the platform's append-mode write semantics and may
/// interleave where those writes are not atomic.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl Default for HistoryStore {
    /// Store over [`DEFAULT_HISTORY_PATH`] in the working directory.
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_PATH)
    }
}

impl HistoryStore {
    /// Create a store over the given log file path.
    ///
    /// The file is not opened or created until the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the underlying log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a completed training run.
    ///
    /// Constructs a [`RunRecord`] stamped with the current UTC time,
    /// appends it as one line to the log file, and returns the written
    /// record.
    ///
    /// # Arguments
    ///
    /// * `params` - hyperparameters and configuration used for the run
    /// * `metrics` - final evaluation metrics
    /// * `history` - per-epoch curves or any JSON value (`Value::Null`
    ///   when there is none)
    /// * `model_paths` - saved model file paths by logical name
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if a payload value cannot be
    /// encoded as JSON, or [`Error::Io`] if the log file cannot be
    /// opened or written.
    pub fn append_run(
        &self,
        params: JsonMap,
        metrics: JsonMap,
        history: Value,
        model_paths: HashMap<String, String>,
    ) -> Result<RunRecord> {
        let record = RunRecord::new(params, metrics, history, model_paths);
        self.append(&record)?;
        Ok(record)
    }

    /// Append an already-constructed record to the end of the log.
    ///
    /// Creates the file if it does not exist; never alters an existing
    /// line. Once this returns `Ok`, the record is visible to every
    /// subsequent [`HistoryStore::load`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the record cannot be encoded
    /// as JSON (the file is left untouched), or [`Error::Io`] if the
    /// log file cannot be opened or written.
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        let mut line = serde_json::to_string(record).map_err(Error::Serialization)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            bytes = line.len(),
            "appended run record"
        );
        Ok(())
    }

    /// Load every recorded run, oldest first.
    ///
    /// A missing log file is an empty history, not an error. Blank
    /// lines are skipped. A non-blank line that does not parse as a
    /// record aborts the load and reports its line number; skipping it
    /// silently would hide corruption.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, or
    /// [`Error::Parse`] identifying the first malformed line.
    pub fn load(&self) -> Result<Vec<RunRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| Error::Parse {
                line: index + 1,
                source,
            })?;
            records.push(record);
        }

        debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded run history"
        );
        Ok(records)
    }

    /// Get the most recently appended record, or `None` on an empty or
    /// missing history.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HistoryStore::load`].
    pub fn last_run(&self) -> Result<Option<RunRecord>> {
        let mut records = self.load()?;
        Ok(records.pop())
    }

    /// Get the records whose `params[name]` equals `value`, append
    /// order preserved.
    ///
    /// Simple equality match; records without the parameter never
    /// match.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HistoryStore::load`].
    pub fn runs_with_param(&self, name: &str, value: &Value) -> Result<Vec<RunRecord>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|record| record.params().get(name) == Some(value))
            .collect())
    }

    /// Get the number of recorded runs.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HistoryStore::load`].
    pub fn run_count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}
