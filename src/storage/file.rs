use std::path::PathBuf;

use crate::core::Snapshot;
use crate::storage::{SnapshotStorage, StorageError};

/// Adapter that keeps the snapshot in a single JSON file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates an adapter backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            std::fs::read_to_string(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Malformed(e.to_string()))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot).map_err(|e| StorageError::Io(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StorageError::Io(e.to_string()))
    }
}
