//! Review statistics over the working set.
//!
//! [`compute_stats`] derives aggregate counts from the full, unfiltered entry
//! set: totals, a per-status breakdown that always lists every status, how
//! many entries carry reviewer commentary, vote totals, and per-source and
//! per-category breakdowns. Used by `clr stats` and by
//! [`ReviewSession::stats`](crate::session::ReviewSession::stats).

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::dataset;
use crate::models::{LogEntry, ReviewStatus};
use crate::output::OutputFormat;
use crate::store::LogStore;

/// Aggregate counts over a set of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    /// Count per status. Every status is present, unused ones map to 0.
    pub per_status: BTreeMap<ReviewStatus, usize>,
    /// Entries with non-empty commentary.
    pub reviewed: usize,
    pub thumbs_up: usize,
    pub thumbs_down: usize,
    pub by_source: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl ReviewStats {
    pub fn count(&self, status: ReviewStatus) -> usize {
        self.per_status.get(&status).copied().unwrap_or(0)
    }
}

/// Compute [`ReviewStats`] for `entries`.
pub fn compute_stats(entries: &[LogEntry]) -> ReviewStats {
    let mut per_status: BTreeMap<ReviewStatus, usize> =
        ReviewStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut reviewed = 0;
    let mut thumbs_up = 0;
    let mut thumbs_down = 0;

    for e in entries {
        *per_status.entry(e.status).or_insert(0) += 1;
        *by_source.entry(e.chatbot_source.clone()).or_insert(0) += 1;
        if let Some(c) = &e.category {
            *by_category.entry(c.clone()).or_insert(0) += 1;
        }
        if e.is_reviewed() {
            reviewed += 1;
        }
        if e.thumbs_up == Some(true) {
            thumbs_up += 1;
        }
        if e.thumbs_down == Some(true) {
            thumbs_down += 1;
        }
    }

    ReviewStats {
        total: entries.len(),
        per_status,
        reviewed,
        thumbs_up,
        thumbs_down,
        by_source,
        by_category,
    }
}

/// Run the stats command: load the log file and print a summary.
pub fn run_stats(config: &Config, format: OutputFormat) -> Result<()> {
    let store = dataset::load_store(config)?;
    let stats = compute_stats(store.entries());

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Chatlog Review — Stats");
    println!("======================");
    println!();
    println!("  Log file:    {}", config.logs.path.display());
    println!();
    println!("  Total:       {}", stats.total);
    println!(
        "  Reviewed:    {} / {} ({}%)",
        stats.reviewed,
        stats.total,
        percent(stats.reviewed, stats.total)
    );
    println!("  Thumbs up:   {}", stats.thumbs_up);
    println!("  Thumbs down: {}", stats.thumbs_down);

    println!();
    println!("  By status:");
    for status in ReviewStatus::ALL {
        println!("    {:<14} {:>6}", status.label(), stats.count(status));
    }

    if !stats.by_source.is_empty() {
        println!();
        println!("  {:<24} {:>6}", "SOURCE", "COUNT");
        println!("  {}", "-".repeat(31));
        for (source, n) in &stats.by_source {
            println!("  {:<24} {:>6}", source, n);
        }
    }

    if !stats.by_category.is_empty() {
        println!();
        println!("  {:<24} {:>6}", "CATEGORY", "COUNT");
        println!("  {}", "-".repeat(31));
        for (category, n) in &stats.by_category {
            println!("  {:<24} {:>6}", category, n);
        }
    }

    println!();
    Ok(())
}

fn percent(part: usize, whole: usize) -> usize {
    if whole > 0 {
        (part * 100) / whole
    } else {
        0
    }
}
