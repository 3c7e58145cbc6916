//! Storage key conventions.
//!
//! These are the three slots the tool persists. The names match the keys the
//! browser version wrote to `localStorage`, so exported data stays readable.

pub const CHECKLIST: &str = "debug_checklist_items";

pub const HISTORY: &str = "error_history_list";

/// Holds the raw input verbatim, not JSON-encoded.
pub const LAST_INPUT: &str = "last_error_input";

pub const ALL: [&str; 3] = [CHECKLIST, HISTORY, LAST_INPUT];
