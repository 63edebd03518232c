use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::Snapshot;
use crate::storage::SnapshotStorage;

/// Default debounce window between a mutation and its write.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Wrapper that coalesces rapid successive saves into a single write.
///
/// Each [`schedule`](Self::schedule) replaces any staged snapshot and pushes
/// the deadline back by the full delay, so a continuous stream of edits
/// postpones the write indefinitely. The host drives [`poll`](Self::poll)
/// from its event loop; any snapshot still staged when the saver is dropped
/// is flushed. Write failures are logged and swallowed; in-memory state
/// stays the source of truth either way.
pub struct DebouncedSaver<S: SnapshotStorage> {
    inner: S,
    delay: Duration,
    pending: Option<Snapshot>,
    deadline: Option<Instant>,
}

impl<S: SnapshotStorage> DebouncedSaver<S> {
    /// Wraps `inner` with the given debounce delay.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Stages a snapshot for writing and resets the deadline.
    pub fn schedule(&mut self, snapshot: Snapshot, now: Instant) {
        self.pending = Some(snapshot);
        self.deadline = Some(now + self.delay);
    }

    /// Writes the staged snapshot once the deadline has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.write_pending();
            }
        }
    }

    /// Writes any staged snapshot immediately.
    pub fn flush(&mut self) {
        self.write_pending();
    }

    /// True while a snapshot is staged and unwritten.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The wrapped storage adapter.
    pub fn storage(&self) -> &S {
        &self.inner
    }

    fn write_pending(&mut self) {
        self.deadline = None;
        if let Some(snapshot) = self.pending.take() {
            match self.inner.save(&snapshot) {
                Ok(()) => debug!("Snapshot written"),
                Err(err) => debug!(%err, "Snapshot write failed, keeping state in memory only"),
            }
        }
    }
}

impl<S: SnapshotStorage> Drop for DebouncedSaver<S> {
    fn drop(&mut self) {
        self.write_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FinanceStore, Transaction, TransactionKind};
    use crate::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn snapshot_with_title(title: &str) -> Snapshot {
        let mut store = FinanceStore::new();
        store.add_transaction(Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            title.into(),
            String::new(),
            1.0,
            TransactionKind::Expense,
            "misc".into(),
            None,
        ));
        store.snapshot()
    }

    #[test]
    fn rapid_schedules_coalesce_into_latest_snapshot() {
        let mut saver = DebouncedSaver::new(MemoryStorage::new(), Duration::from_secs(1));
        let start = Instant::now();
        saver.schedule(snapshot_with_title("first"), start);
        saver.schedule(snapshot_with_title("second"), start + Duration::from_millis(300));

        // Deadline was pushed back by the second schedule.
        saver.poll(start + Duration::from_secs(1));
        assert!(saver.has_pending());

        saver.poll(start + Duration::from_millis(1300));
        assert!(!saver.has_pending());
        let written = saver.storage().load().unwrap().unwrap();
        assert_eq!(written.finances.transactions[0].title, "second");
    }

    #[test]
    fn poll_before_deadline_writes_nothing() {
        let mut saver = DebouncedSaver::new(MemoryStorage::new(), DEFAULT_DELAY);
        let start = Instant::now();
        saver.schedule(snapshot_with_title("pending"), start);
        saver.poll(start + Duration::from_millis(500));
        assert!(saver.has_pending());
        assert_eq!(saver.storage().load().unwrap(), None);
    }

    #[test]
    fn flush_writes_immediately() {
        let mut saver = DebouncedSaver::new(MemoryStorage::new(), DEFAULT_DELAY);
        saver.schedule(snapshot_with_title("now"), Instant::now());
        saver.flush();
        assert!(saver.storage().load().unwrap().is_some());
    }
}
