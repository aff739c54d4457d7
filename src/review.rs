//! Mutating review commands: edit, triage, and vote.
//!
//! Each command loads the log file into a store, applies one operation, and
//! writes the log file back only when the operation changed something. An
//! unknown id is reported on stderr and is otherwise a no-op.

use anyhow::Result;

use crate::config::Config;
use crate::dataset;
use crate::models::{LogEntry, ReviewStatus, Vote};
use crate::store::LogStore;

/// Field edits requested by `clr edit`. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EntryEdit {
    pub status: Option<ReviewStatus>,
    pub classification: Option<String>,
    pub commentary: Option<String>,
    pub category: Option<String>,
    pub reviewer_id: Option<String>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.classification.is_none()
            && self.commentary.is_none()
            && self.category.is_none()
            && self.reviewer_id.is_none()
    }

    /// Apply the edit to `entry`. An empty string clears an optional field.
    pub fn apply(&self, entry: &mut LogEntry) {
        if let Some(status) = self.status {
            entry.status = status;
        }
        set_optional(&mut entry.classification, &self.classification);
        set_optional(&mut entry.commentary, &self.commentary);
        set_optional(&mut entry.category, &self.category);
        set_optional(&mut entry.reviewer_id, &self.reviewer_id);
    }
}

fn set_optional(field: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *field = if v.is_empty() { None } else { Some(v.clone()) };
    }
}

/// Apply `edit` to the entry with `id` inside `store`.
pub fn edit_entry<S: LogStore>(store: &mut S, id: &str, edit: &EntryEdit) -> bool {
    let mut entry = match store.get(id) {
        Some(e) => e.clone(),
        None => {
            tracing::debug!(id, "edit: no entry with this id");
            return false;
        }
    };
    edit.apply(&mut entry);
    store.replace(entry)
}

pub fn run_edit(config: &Config, id: &str, edit: &EntryEdit) -> Result<()> {
    if edit.is_empty() {
        eprintln!("Nothing to edit: pass at least one of --status, --classification, --commentary, --category, --reviewer.");
        return Ok(());
    }
    let mut store = dataset::load_store(config)?;
    if edit_entry(&mut store, id, edit) {
        dataset::save_store(config, &store)?;
        println!("Updated entry {}.", id);
    } else {
        eprintln!("Entry not found: {} (nothing changed)", id);
    }
    Ok(())
}

pub fn run_triage(config: &Config, id: &str) -> Result<()> {
    let mut store = dataset::load_store(config)?;
    if store.triage(id) {
        dataset::save_store(config, &store)?;
        println!("Entry {} marked as triaged.", id);
    } else {
        eprintln!("Entry not found: {} (nothing changed)", id);
    }
    Ok(())
}

pub fn run_vote(config: &Config, id: &str, vote: Vote) -> Result<()> {
    let mut store = dataset::load_store(config)?;
    if store.toggle_review(id, vote) {
        dataset::save_store(config, &store)?;
        let state = match store.get(id).and_then(|e| e.vote()) {
            Some(Vote::Up) => "thumbs up",
            Some(Vote::Down) => "thumbs down",
            None => "no vote",
        };
        println!("Entry {}: {}.", id, state);
    } else {
        eprintln!("Entry not found: {} (nothing changed)", id);
    }
    Ok(())
}
