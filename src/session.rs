//! Review session state: the store, the active filters, and the selection.
//!
//! [`ReviewSession`] is the single owner of the working set during a review.
//! Every view it hands out (visible entries, stats, the selected entry) is
//! recomputed from the store on demand, so there is nothing to invalidate
//! after a mutation.

use crate::filter::{apply_filters, FilterSpec};
use crate::models::{LogEntry, Vote};
use crate::navigate;
use crate::stats::{compute_stats, ReviewStats};
use crate::store::LogStore;

pub struct ReviewSession<S: LogStore> {
    store: S,
    filters: FilterSpec,
    selected: Option<String>,
}

impl<S: LogStore> ReviewSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            filters: FilterSpec::default(),
            selected: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Entries passing the active filters, in working order.
    pub fn visible(&self) -> Vec<&LogEntry> {
        apply_filters(self.store.entries(), &self.filters)
    }

    /// Stats over the full, unfiltered working set.
    pub fn stats(&self) -> ReviewStats {
        compute_stats(self.store.entries())
    }

    /// Select the entry with `id`. Returns `false` (and keeps the current
    /// selection) when it is not in the visible view.
    pub fn select(&mut self, id: &str) -> bool {
        if self.visible().iter().any(|e| e.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The selected entry, or `None` when nothing is selected or the
    /// selection has fallen outside the active filters.
    pub fn selected(&self) -> Option<&LogEntry> {
        let id = self.selected.as_deref()?;
        if !self.filters.matches(self.store.get(id)?) {
            return None;
        }
        self.store.get(id)
    }

    /// "N of M" for the selected entry within the visible view.
    pub fn selected_position(&self) -> Option<(usize, usize)> {
        let id = self.selected.as_deref()?;
        navigate::position(&self.visible(), id)
    }

    /// Move the selection to the next visible entry. Stays put at the end.
    pub fn select_next(&mut self) -> Option<&LogEntry> {
        let id = self.selected()?.id.clone();
        let next_id = navigate::next(&self.visible(), &id)?.id.clone();
        self.selected = Some(next_id);
        self.selected()
    }

    /// Move the selection to the previous visible entry. Stays put at the start.
    pub fn select_previous(&mut self) -> Option<&LogEntry> {
        let id = self.selected()?.id.clone();
        let prev_id = navigate::previous(&self.visible(), &id)?.id.clone();
        self.selected = Some(prev_id);
        self.selected()
    }

    /// Write an edited entry back and make it the selection.
    pub fn save(&mut self, entry: LogEntry) -> bool {
        let id = entry.id.clone();
        if self.store.replace(entry) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn triage_selected(&mut self) -> bool {
        match self.selected().map(|e| e.id.clone()) {
            Some(id) => self.store.triage(&id),
            None => false,
        }
    }

    pub fn vote_selected(&mut self, vote: Vote) -> bool {
        match self.selected().map(|e| e.id.clone()) {
            Some(id) => self.store.toggle_review(&id, vote),
            None => false,
        }
    }
}
