//! Error classification.
//!
//! A linear scan over an ordered rule table with plain substring matching.
//! This must stay a scan: matching is containment rather than equality, and
//! earlier rules take priority.

use crate::models::translation::Translation;
use crate::rules::{Rule, FALLBACK_FIX, FALLBACK_MEANING, RULES};

/// A classifier over a fixed, ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
    fallback: (&'static str, &'static str),
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&RULES)
    }
}

impl Classifier {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self {
            rules,
            fallback: (FALLBACK_MEANING, FALLBACK_FIX),
        }
    }

    /// Position of the first rule whose trigger occurs in `raw`, if any.
    pub fn matching_rule(&self, raw: &str) -> Option<usize> {
        let text = raw.to_lowercase();
        self.rules
            .iter()
            .position(|rule| text.contains(rule.trigger))
    }

    pub fn classify(&self, raw: &str) -> Translation {
        match self.matching_rule(raw) {
            Some(i) => {
                let rule = &self.rules[i];
                Translation::new(rule.meaning, rule.fix)
            }
            None => Translation::new(self.fallback.0, self.fallback.1),
        }
    }
}

/// Classify `raw` against the built-in table.
pub fn classify(raw: &str) -> Translation {
    Classifier::default().classify(raw)
}
