//! In-memory [`LogStore`] implementation.
//!
//! Entries live in a `Vec` in working order. Lookups are linear scans; the
//! working sets this serves are tens to low thousands of entries.

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::models::LogEntry;

use super::LogStore;

/// In-memory store owning the working set of entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogStore {
    entries: Vec<LogEntry>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `entries`, rejecting duplicate ids.
    pub fn from_entries(entries: Vec<LogEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(e.id.as_str()) {
                bail!("duplicate log entry id: {}", e.id);
            }
        }
        Ok(Self { entries })
    }

    /// Consume the store, returning the entries in working order.
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl LogStore for InMemoryLogStore {
    fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    fn replace(&mut self, entry: LogEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                tracing::debug!(id = %entry.id, "replace");
                *slot = entry;
                true
            }
            None => {
                tracing::debug!(id = %entry.id, "replace: no entry with this id");
                false
            }
        }
    }
}
