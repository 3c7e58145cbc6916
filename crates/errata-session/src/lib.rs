//! errata-session
//!
//! The stateful half of the tool: the debugging checklist, the recent-error
//! history and the last input, each written through to a [`KeyValueStore`]
//! after every change.
//!
//! [`KeyValueStore`]: errata_storage::KeyValueStore

pub mod checklist;
pub mod history;
pub mod session;

pub use checklist::ChecklistStore;
pub use history::HistoryStore;
pub use session::{Outcome, Session};
