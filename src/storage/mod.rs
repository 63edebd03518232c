//! Storage adapters for persisting store snapshots.
//!
//! The store itself never touches storage; the host wires a
//! [`SnapshotStorage`] adapter to the store through [`restore`] at startup
//! and a [`debounce::DebouncedSaver`] for writes. In-memory state is always
//! the source of truth; storage is a lagging, best-effort mirror.

pub mod debounce;
pub mod file;

use tracing::{debug, info};

use crate::core::{FinanceStore, Snapshot};

/// Errors that can occur when reading or writing a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The slot could not be read or written.
    Io(String),
    /// The persisted data did not parse as a snapshot.
    Malformed(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "storage i/o failed: {msg}"),
            StorageError::Malformed(msg) => write!(f, "persisted snapshot is malformed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Abstraction over a single snapshot slot.
pub trait SnapshotStorage {
    /// Reads the persisted snapshot. An absent slot is `Ok(None)`.
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;
    /// Overwrites the persisted snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// In-process slot. Used by tests and as the no-persistence fallback.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with raw serialized data, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        match &self.slot {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Malformed(e.to_string())),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot).map_err(|e| StorageError::Io(e.to_string()))?;
        self.slot = Some(raw);
        Ok(())
    }
}

/// Seeds a store from storage at startup.
///
/// An absent, unreadable, or malformed slot all yield the default initial
/// state; load problems are logged and never propagated.
pub fn restore(storage: &impl SnapshotStorage) -> FinanceStore {
    match storage.load() {
        Ok(Some(snapshot)) => {
            info!(
                transactions = snapshot.finances.transactions.len(),
                accounts = snapshot.finances.accounts.len(),
                budgets = snapshot.finances.budgets.len(),
                debts = snapshot.finances.debts.len(),
                "Restored persisted snapshot"
            );
            FinanceStore::from_snapshot(snapshot)
        }
        Ok(None) => {
            debug!("No persisted snapshot, starting fresh");
            FinanceStore::new()
        }
        Err(err) => {
            debug!(%err, "Ignoring unreadable snapshot, starting fresh");
            FinanceStore::new()
        }
    }
}
