//! Next / previous navigation over a filtered view.
//!
//! Navigation is defined over the sequence the reviewer currently sees, not
//! the full store. An id that is not in the sequence has no neighbours.
//! There is no wraparound at either end.

use std::borrow::Borrow;

use crate::models::LogEntry;

fn index_of<E: Borrow<LogEntry>>(entries: &[E], id: &str) -> Option<usize> {
    entries.iter().position(|e| e.borrow().id == id)
}

/// The entry immediately after `current_id`, if any.
pub fn next<'a, E: Borrow<LogEntry>>(entries: &'a [E], current_id: &str) -> Option<&'a LogEntry> {
    let i = index_of(entries, current_id)?;
    entries.get(i + 1).map(|e| e.borrow())
}

/// The entry immediately before `current_id`, if any.
pub fn previous<'a, E: Borrow<LogEntry>>(
    entries: &'a [E],
    current_id: &str,
) -> Option<&'a LogEntry> {
    let i = index_of(entries, current_id)?;
    if i == 0 {
        return None;
    }
    entries.get(i - 1).map(|e| e.borrow())
}

/// 1-based position of `id` and the sequence length, e.g. `(3, 8)` for "3 of 8".
pub fn position<E: Borrow<LogEntry>>(entries: &[E], id: &str) -> Option<(usize, usize)> {
    index_of(entries, id).map(|i| (i + 1, entries.len()))
}
