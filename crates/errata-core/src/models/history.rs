use serde::{Deserialize, Serialize};

use super::translation::Translation;

/// Longest input excerpt kept in a history record, in characters.
pub const EXCERPT_LEN: usize = 150;

/// A translated error, as shown in the recent-errors list.
///
/// Serialized field names follow the persisted layout
/// (`error`, `translation`, `fix`, `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "error")]
    pub input: String,
    #[serde(rename = "translation")]
    pub meaning: String,
    pub fix: String,
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl HistoryRecord {
    /// Build a record, cutting `input` down to [`EXCERPT_LEN`] characters.
    pub fn new(
        input: &str,
        meaning: impl Into<String>,
        fix: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            input: excerpt(input),
            meaning: meaning.into(),
            fix: fix.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Build a record stamped with the current local time.
    pub fn now(input: &str, meaning: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(input, meaning, fix, display_now())
    }

    pub fn translation(&self) -> Translation {
        Translation::new(self.meaning.clone(), self.fix.clone())
    }
}

fn excerpt(input: &str) -> String {
    match input.char_indices().nth(EXCERPT_LEN) {
        Some((cut, _)) => input[..cut].to_string(),
        None => input.to_string(),
    }
}

/// Current local wall-clock time, formatted for display.
pub fn display_now() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string()
}
