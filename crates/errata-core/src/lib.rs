//! errata-core
//!
//! Pure domain logic: the rule tables, the classifier and suggestion engine,
//! the suggestion debouncer, and the record types that get persisted.
//! No I/O here; storage lives in `errata-storage`.

pub mod classify;
pub mod debounce;
pub mod keys;
pub mod models;
pub mod rules;
pub mod suggest;

pub use classify::{classify, Classifier};
pub use models::checklist::ChecklistItem;
pub use models::history::HistoryRecord;
pub use models::translation::Translation;
pub use suggest::{suggest, suggest_for_input};
