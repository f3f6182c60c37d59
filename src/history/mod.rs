//! In-memory run history
//!
//! A bounded, most-recent-first store of completed runs. Append-and-evict
//! only: entries are never mutated or individually deleted, and state lives
//! for the process lifetime only.

use crate::core::Run;

/// Maximum number of runs retained.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded most-recent-first store of completed runs
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    runs: Vec<Run>,
}

impl HistoryStore {
    /// Create an empty store with the fixed capacity
    pub fn new() -> Self {
        Self {
            capacity: HISTORY_CAPACITY,
            runs: Vec::new(),
        }
    }

    /// Record a completed run.
    ///
    /// Prepends the run; when the store exceeds capacity the oldest entry is
    /// evicted. Returns the updated sequence, most recent first.
    pub fn record(&mut self, run: Run) -> &[Run] {
        self.runs.insert(0, run);
        self.runs.truncate(self.capacity);
        &self.runs
    }

    /// All retained runs, most recent first
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The most recent run, if any
    pub fn latest(&self) -> Option<&Run> {
        self.runs.first()
    }

    /// Number of retained runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the store holds no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_named(n: usize) -> Run {
        Run {
            id: format!("run-{n}"),
            workflow_name: format!("workflow {n}"),
            input: "hello".to_string(),
            results: Vec::new(),
            started_at: "2026-01-01 12:00:00".to_string(),
            duration_ms: 0,
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert!(store.latest().is_none());
    }

    #[test]
    fn test_most_recent_first() {
        let mut store = HistoryStore::new();
        store.record(run_named(1));
        store.record(run_named(2));

        assert_eq!(store.len(), 2);
        assert_eq!(store.latest().unwrap().id, "run-2");
        assert_eq!(store.runs()[1].id, "run-1");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut store = HistoryStore::new();
        for n in 1..=6 {
            store.record(run_named(n));
        }

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.latest().unwrap().id, "run-6");
        // The first run was evicted; the oldest retained is the second.
        assert_eq!(store.runs().last().unwrap().id, "run-2");
    }

    #[test]
    fn test_record_returns_updated_sequence() {
        let mut store = HistoryStore::new();
        let snapshot = store.record(run_named(1));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "run-1");
    }
}
