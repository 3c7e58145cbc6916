use errata_core::keys;
use errata_core::models::checklist::{self, ChecklistItem};
use errata_storage::KeyValueStore;
use errata_storage::state::{load_state_or_else, save_state};

/// The debugging checklist.
///
/// Every mutating call saves the whole list before returning. A failed save
/// is logged and otherwise ignored; the in-memory list stays authoritative
/// for the rest of the session.
///
/// Items are addressed by position. Out-of-range positions and blank labels
/// are ignored, and the mutators return `false` when nothing changed.
#[derive(Debug)]
pub struct ChecklistStore<S> {
    storage: S,
    items: Vec<ChecklistItem>,
}

impl<S: KeyValueStore> ChecklistStore<S> {
    /// Load the saved checklist, or the seed list if there is none or it is
    /// unreadable.
    pub fn load(storage: S) -> Self {
        let items = load_state_or_else(&storage, keys::CHECKLIST, checklist::seed);
        Self { storage, items }
    }

    /// Start from `items` without touching storage.
    pub fn with_items(storage: S, items: Vec<ChecklistItem>) -> Self {
        Self { storage, items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ChecklistItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Share of ticked items as a whole percentage, rounding halves up.
    /// An empty list is 0%.
    pub fn progress_percent(&self) -> u8 {
        let total = self.items.len();
        if total == 0 {
            return 0;
        }
        let done = self.done_count();
        ((done * 200 + total) / (total * 2)) as u8
    }

    /// Items whose text contains `query`, ignoring case, with their positions.
    /// An empty query matches everything.
    pub fn filter<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = (usize, &'a ChecklistItem)> + use<'a, S> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| item.text.to_lowercase().contains(&query))
    }

    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.items.push(ChecklistItem::new(label));
        self.persist();
        true
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            tracing::debug!(index, len = self.items.len(), "toggle out of range");
            return false;
        };
        item.done = !item.done;
        self.persist();
        true
    }

    pub fn set_done(&mut self, index: usize, done: bool) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            tracing::debug!(index, len = self.items.len(), "set_done out of range");
            return false;
        };
        item.done = done;
        self.persist();
        true
    }

    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "delete out of range");
            return false;
        }
        self.items.remove(index);
        self.persist();
        true
    }

    /// Untick everything. Items are kept.
    pub fn reset_progress(&mut self) {
        for item in &mut self.items {
            item.done = false;
        }
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_state(&self.storage, keys::CHECKLIST, &self.items) {
            tracing::warn!(error = %e, "failed to save checklist");
        }
    }
}
