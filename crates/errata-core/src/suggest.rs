//! The tip line shown while the user is still typing.
//!
//! Deliberately separate from [`crate::classify`]: it has its own, coarser
//! trigger set and fires on idle input rather than on an explicit submit.

use crate::rules::{FALLBACK_TIP, TIPS};

/// Inputs this short (after trimming) never get a tip.
pub const MIN_INPUT_LEN: usize = 10;

/// First matching tip for `raw`, or the generic one.
pub fn suggest(raw: &str) -> &'static str {
    let text = raw.to_lowercase();
    TIPS.iter()
        .find(|tip| text.contains(tip.trigger))
        .map_or(FALLBACK_TIP, |tip| tip.text)
}

/// The tip to show once typing has gone quiet, if the input is long enough
/// to be worth one.
pub fn suggest_for_input(raw: &str) -> Option<&'static str> {
    let text = raw.trim();
    (text.chars().count() > MIN_INPUT_LEN).then(|| suggest(text))
}
