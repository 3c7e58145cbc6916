use errata_core::keys;
use errata_core::models::history::HistoryRecord;
use errata_storage::KeyValueStore;
use errata_storage::state::{load_state_or_else, save_state};

/// Most records kept. Older ones are dropped first.
pub const CAPACITY: usize = 20;

/// The recent-errors log.
///
/// Stored oldest-first; [`HistoryStore::list`] reads it back newest-first.
/// Writes through on every change, like [`crate::ChecklistStore`].
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    records: Vec<HistoryRecord>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn load(storage: S) -> Self {
        let mut records: Vec<HistoryRecord> =
            load_state_or_else(&storage, keys::HISTORY, Vec::new);
        if records.len() > CAPACITY {
            tracing::warn!(len = records.len(), "saved history over capacity, trimming");
            evict_oldest(&mut records);
        }
        Self { storage, records }
    }

    /// Translate-and-remember: stamp the current time and append.
    pub fn record(&mut self, input: &str, meaning: &str, fix: &str) -> &HistoryRecord {
        self.push(HistoryRecord::now(input, meaning, fix))
    }

    /// Append an already-built record.
    pub fn push(&mut self, record: HistoryRecord) -> &HistoryRecord {
        self.records.push(record);
        evict_oldest(&mut self.records);
        self.persist();
        &self.records[self.records.len() - 1]
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.persist();
    }

    /// Newest first.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &HistoryRecord> + DoubleEndedIterator {
        self.records.iter().rev()
    }

    /// The record at `position` in newest-first order.
    pub fn get(&self, position: usize) -> Option<&HistoryRecord> {
        self.records.iter().rev().nth(position)
    }

    /// Oldest first, as stored.
    pub fn chronological(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = save_state(&self.storage, keys::HISTORY, &self.records) {
            tracing::warn!(error = %e, "failed to save history");
        }
    }
}

fn evict_oldest(records: &mut Vec<HistoryRecord>) {
    if records.len() > CAPACITY {
        let excess = records.len() - CAPACITY;
        records.drain(..excess);
    }
}
