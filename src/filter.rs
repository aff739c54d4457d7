//! Filter engine over the working set of log entries.
//!
//! A [`FilterSpec`] is a bag of independent, optional predicates. An entry
//! is visible when it satisfies every predicate that is present; an absent
//! or empty predicate imposes no constraint. [`apply_filters`] is a pure,
//! order-preserving scan, so callers recompute it on every change instead
//! of caching.
//!
//! # Predicates
//!
//! | Predicate | Passes when |
//! |-----------|-------------|
//! | `status` | set is empty, or contains the entry's status |
//! | `search` | term is empty, or occurs (case-insensitive) in query, response, their translations, or commentary |
//! | `category` | set is empty, or the entry has a category in the set |
//! | `chatbot_source` | set is empty, or contains the entry's source |
//! | `confidence_range` | range is absent, or the entry's score lies in `[min, max]` |
//!
//! An entry with no confidence score is excluded whenever a confidence range
//! is set. A range with `min > max` matches nothing.

use serde::{Deserialize, Serialize};

use crate::models::{LogEntry, ReviewStatus};

/// Inclusive bounds on `confidence_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRange {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Build a range from optional bounds; `None` when both are absent.
    /// A missing bound defaults to the edge of `[0.0, 1.0]`.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (min, max) => Some(Self::new(min.unwrap_or(0.0), max.unwrap_or(1.0))),
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

/// The set of active predicates a reviewer has configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ReviewStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chatbot_source: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_range: Option<ConfidenceRange>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        if !self.status.contains(&status) {
            self.status.push(status);
        }
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.category.contains(&category) {
            self.category.push(category);
        }
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        if !self.chatbot_source.contains(&source) {
            self.chatbot_source.push(source);
        }
        self
    }

    pub fn with_confidence(mut self, min: f64, max: f64) -> Self {
        self.confidence_range = Some(ConfidenceRange::new(min, max));
        self
    }

    /// Add `status` to the status set, or remove it if already present.
    pub fn toggle_status(&mut self, status: ReviewStatus) {
        toggle(&mut self.status, status);
    }

    /// Add `category` to the category set, or remove it if already present.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.category, category.to_string());
    }

    /// Add `source` to the source set, or remove it if already present.
    pub fn toggle_source(&mut self, source: &str) {
        toggle(&mut self.chatbot_source, source.to_string());
    }

    /// Drop every predicate.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when at least one predicate constrains the result.
    pub fn is_active(&self) -> bool {
        !self.status.is_empty()
            || self.search.as_deref().is_some_and(|s| !s.is_empty())
            || !self.category.is_empty()
            || !self.chatbot_source.is_empty()
            || self.confidence_range.is_some()
    }

    /// True when `entry` satisfies every present predicate.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.matches_status(entry)
            && self.matches_category(entry)
            && self.matches_source(entry)
            && self.matches_confidence(entry)
            && self.matches_search(entry)
    }

    fn matches_status(&self, entry: &LogEntry) -> bool {
        self.status.is_empty() || self.status.contains(&entry.status)
    }

    fn matches_search(&self, entry: &LogEntry) -> bool {
        let term = match self.search.as_deref() {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        let fields = [
            Some(entry.user_query.as_str()),
            entry.user_query_english.as_deref(),
            Some(entry.bot_response.as_str()),
            entry.bot_response_english.as_deref(),
            entry.commentary.as_deref(),
        ];
        fields
            .iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&term))
    }

    fn matches_category(&self, entry: &LogEntry) -> bool {
        if self.category.is_empty() {
            return true;
        }
        match &entry.category {
            Some(c) => self.category.contains(c),
            None => false,
        }
    }

    fn matches_source(&self, entry: &LogEntry) -> bool {
        self.chatbot_source.is_empty() || self.chatbot_source.contains(&entry.chatbot_source)
    }

    // Entries without a score are excluded whenever a range is set.
    fn matches_confidence(&self, entry: &LogEntry) -> bool {
        match (&self.confidence_range, entry.confidence_score) {
            (None, _) => true,
            (Some(range), Some(score)) => range.contains(score),
            (Some(_), None) => false,
        }
    }
}

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    match set.iter().position(|v| *v == value) {
        Some(i) => {
            set.remove(i);
        }
        None => set.push(value),
    }
}

/// The subsequence of `entries` satisfying `spec`, in original order.
pub fn apply_filters<'a>(entries: &'a [LogEntry], spec: &FilterSpec) -> Vec<&'a LogEntry> {
    entries.iter().filter(|e| spec.matches(e)).collect()
}
