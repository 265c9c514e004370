use std::path::{Path, PathBuf};

use tracing::info;
use vetlog_core::keys;
use vetlog_core::models::log::SymptomLog;

use crate::error::StorageError;
use crate::state;

/// Source of symptom logs for analysis.
pub trait LogStore {
    /// Every stored log, for every profile, in insertion order.
    fn load_logs(&self) -> Result<Vec<SymptomLog>, StorageError>;

    /// Append `logs` and return the new total.
    fn append_logs(&self, logs: &[SymptomLog]) -> Result<usize, StorageError>;
}

/// Logs kept as one JSON array in a data directory.
#[derive(Debug, Clone)]
pub struct FileLogStore {
    root: PathBuf,
}

impl FileLogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LogStore for FileLogStore {
    fn load_logs(&self) -> Result<Vec<SymptomLog>, StorageError> {
        state::load_state_or_default(&self.root, keys::SYMPTOM_LOGS)
    }

    fn append_logs(&self, logs: &[SymptomLog]) -> Result<usize, StorageError> {
        let mut all = self.load_logs()?;
        all.extend_from_slice(logs);
        state::save_state(&self.root, keys::SYMPTOM_LOGS, &all)?;
        info!(added = logs.len(), total = all.len(), "symptom logs saved");
        Ok(all.len())
    }
}
