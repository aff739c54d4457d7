//! Storage abstraction for Chatlog Review.
//!
//! The [`LogStore`] trait defines the operations a presentation layer uses
//! to read and edit the working set of log entries. Entries are only ever
//! mutated by whole-entry replacement; the review conveniences
//! ([`toggle_review`](LogStore::toggle_review), [`triage`](LogStore::triage))
//! are compositions of a read and a [`replace`](LogStore::replace).
//!
//! Every mutating operation treats an unknown id as a no-op and reports
//! whether anything changed instead of failing.

pub mod memory;

use crate::models::{LogEntry, ReviewStatus, Vote};

/// Single-writer storage for the working set of log entries.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`entries`](LogStore::entries) | All entries in working order |
/// | [`get`](LogStore::get) | Look up an entry by id |
/// | [`replace`](LogStore::replace) | Replace an entry in place by id |
/// | [`toggle_review`](LogStore::toggle_review) | Flip a thumbs-up / thumbs-down vote |
/// | [`triage`](LogStore::triage) | Set status to `triaged` |
pub trait LogStore {
    /// All entries, in working order.
    fn entries(&self) -> &[LogEntry];

    /// Replace the entry whose id matches `entry.id`, keeping its position.
    ///
    /// Returns `false` and leaves the store untouched when no entry has
    /// that id. The store keeps exactly the value passed in.
    fn replace(&mut self, entry: LogEntry) -> bool;

    /// Look up an entry by id.
    fn get(&self, id: &str) -> Option<&LogEntry> {
        self.entries().iter().find(|e| e.id == id)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Apply `vote` to the named entry and write it back.
    ///
    /// Turning a flag on forces the opposite flag off; voting the same way
    /// again turns the flag off.
    fn toggle_review(&mut self, id: &str, vote: Vote) -> bool {
        let mut entry = match self.get(id) {
            Some(e) => e.clone(),
            None => {
                tracing::debug!(id, "toggle_review: no entry with this id");
                return false;
            }
        };
        entry.toggle_vote(vote);
        tracing::debug!(id, ?vote, "toggle_review");
        self.replace(entry)
    }

    /// Set the named entry's status to [`ReviewStatus::Triaged`], leaving
    /// every other field untouched.
    fn triage(&mut self, id: &str) -> bool {
        let mut entry = match self.get(id) {
            Some(e) => e.clone(),
            None => {
                tracing::debug!(id, "triage: no entry with this id");
                return false;
            }
        };
        entry.status = ReviewStatus::Triaged;
        tracing::debug!(id, "triage");
        self.replace(entry)
    }
}
