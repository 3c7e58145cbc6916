pub mod checklist;
pub mod history;
pub mod translation;
