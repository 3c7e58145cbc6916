use serde::{Deserialize, Serialize};

/// A plain-language reading of an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub meaning: String,
    pub fix: String,
}

impl Translation {
    pub fn new(meaning: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            meaning: meaning.into(),
            fix: fix.into(),
        }
    }
}
