use serde::{Deserialize, Serialize};

/// One line of the debugging checklist.
///
/// Items have no id of their own: an item is addressed by its position in
/// the list, so deleting one shifts every later item down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

const SEED: [&str; 16] = [
    "Check the console for the exact error line number.",
    "Make sure your script.js is linked correctly in HTML.",
    "Check if your element ID matches your JavaScript selector.",
    "Make sure your script is placed before </body>.",
    "Refresh your browser using Ctrl + Shift + R.",
    "Check if your function is being called correctly.",
    "Make sure your variables are declared properly.",
    "Look for missing brackets: { } ( ) [ ].",
    "Check spelling mistakes in variable names.",
    "Check for missing semicolons or commas.",
    "Make sure you didn't forget return in your function.",
    "If using localStorage, check if the key exists first.",
    "Check if your API URL or fetch request is correct.",
    "If using arrays, confirm index is valid.",
    "Check if your CSS is overriding your design.",
    "Test your website on mobile using Inspect Element.",
];

/// The checklist a fresh install starts with. Nothing is ticked.
pub fn seed() -> Vec<ChecklistItem> {
    SEED.iter().map(|text| ChecklistItem::new(*text)).collect()
}
