//! Plain-text rendering of core results.

use std::io::{self, Write};

use errata_core::{ChecklistItem, HistoryRecord, Translation};

pub fn translation(out: &mut impl Write, t: &Translation) -> io::Result<()> {
    writeln!(out, "Meaning: {}", t.meaning)?;
    writeln!(out, "Fix:     {}", t.fix)
}

/// One checklist line. `index` is zero-based; the printed number is not.
pub fn checklist_item(out: &mut impl Write, index: usize, item: &ChecklistItem) -> io::Result<()> {
    let mark = if item.done { 'x' } else { ' ' };
    writeln!(out, "[{mark}] {:>2}. {}", index + 1, item.text)
}

pub fn progress(out: &mut impl Write, done: usize, total: usize, percent: u8) -> io::Result<()> {
    writeln!(out, "Progress: {percent}% ({done}/{total})")
}

pub fn history_entry(out: &mut impl Write, number: usize, record: &HistoryRecord) -> io::Result<()> {
    writeln!(out, "{number:>2}. [{}] {}", record.timestamp, record.input)?;
    writeln!(out, "    {}", record.meaning)
}

pub fn empty_history(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No history yet. Translate an error first.")
}
