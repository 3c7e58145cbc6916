use errata_core::keys;
use errata_core::models::translation::Translation;
use errata_core::{classify, HistoryRecord};
use errata_storage::KeyValueStore;

use crate::checklist::ChecklistStore;
use crate::history::HistoryStore;

pub const EMPTY_INPUT_MEANING: &str = "Please paste an error first.";
pub const EMPTY_INPUT_FIX: &str = "Try copying an error from your console (F12 > Console).";

/// What a translate request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input. Carries a prompt instead of a translation; nothing is recorded.
    EmptyInput(Translation),
    /// Classified and appended to history.
    Translated(Translation),
}

impl Outcome {
    pub fn translation(&self) -> &Translation {
        match self {
            Outcome::EmptyInput(t) | Outcome::Translated(t) => t,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, Outcome::Translated(_))
    }
}

/// Everything one user session touches: checklist, history and the input
/// box, all backed by one shared store.
#[derive(Debug)]
pub struct Session<S> {
    storage: S,
    checklist: ChecklistStore<S>,
    history: HistoryStore<S>,
    input: String,
}

impl<S: KeyValueStore + Clone> Session<S> {
    /// Load all three slots. Missing or broken slots start from their
    /// defaults; opening never fails.
    pub fn open(storage: S) -> Self {
        let checklist = ChecklistStore::load(storage.clone());
        let history = HistoryStore::load(storage.clone());
        let input = match storage.get(keys::LAST_INPUT) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read last input");
                String::new()
            }
        };
        tracing::debug!(
            checklist = checklist.len(),
            history = history.len(),
            "session opened"
        );
        Self {
            storage,
            checklist,
            history,
            input,
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Translate `raw` and remember it.
    ///
    /// The input is trimmed before classification and recording; the raw
    /// text is what ends up in the input slot.
    pub fn translate(&mut self, raw: &str) -> Outcome {
        let text = raw.trim();
        if text.is_empty() {
            return Outcome::EmptyInput(Translation::new(EMPTY_INPUT_MEANING, EMPTY_INPUT_FIX));
        }

        let translation = classify(text);
        self.history
            .record(text, &translation.meaning, &translation.fix);
        self.set_input(raw);
        Outcome::Translated(translation)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the saved input, as typing into the input box does.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        if let Err(e) = self.storage.set(keys::LAST_INPUT, &self.input) {
            tracing::warn!(error = %e, "failed to save last input");
        }
    }

    pub fn clear_input(&mut self) {
        self.set_input("");
    }

    /// Put a history entry back into the input box. `position` counts from
    /// the newest record.
    pub fn recall(&mut self, position: usize) -> Option<HistoryRecord> {
        let record = self.history.get(position)?.clone();
        self.set_input(&record.input);
        Some(record)
    }

    pub fn checklist(&self) -> &ChecklistStore<S> {
        &self.checklist
    }

    pub fn checklist_mut(&mut self) -> &mut ChecklistStore<S> {
        &mut self.checklist
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore<S> {
        &mut self.history
    }
}
