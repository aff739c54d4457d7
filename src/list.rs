//! Filtered listing and next / previous lookup for the CLI.
//!
//! `clr list` prints the entries passing the given filters, in working
//! order, together with a "N of M entries" summary. `clr next` and
//! `clr prev` resolve a neighbour within the same filtered view.

use anyhow::Result;

use crate::config::Config;
use crate::dataset;
use crate::filter::{apply_filters, FilterSpec};
use crate::models::LogEntry;
use crate::navigate;
use crate::output::{snippet, OutputFormat};
use crate::store::LogStore;

/// Which neighbour `run_neighbour` resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Run the list command.
pub fn run_list(
    config: &Config,
    filters: &FilterSpec,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let store = dataset::load_store(config)?;
    let visible = apply_filters(store.entries(), filters);
    let limit = limit.unwrap_or(config.display.list_limit);
    let shown: Vec<&LogEntry> = visible.iter().copied().take(limit).collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("{} of {} entries", visible.len(), store.len());
    if shown.is_empty() {
        return Ok(());
    }
    println!();
    println!(
        "{:<8} {:<13} {:<10} {:<20} {:>5}  QUERY",
        "ID", "STATUS", "SOURCE", "CATEGORY", "CONF"
    );
    println!("{}", "-".repeat(72));
    for e in &shown {
        let conf = e
            .confidence_score
            .map(|s| format!("{:.0}%", s * 100.0))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:<13} {:<10} {:<20} {:>5}  {}",
            e.id,
            e.status.as_str(),
            e.chatbot_source,
            e.category.as_deref().unwrap_or("-"),
            conf,
            snippet(e.display_query(), config.display.snippet_chars)
        );
    }
    if shown.len() < visible.len() {
        println!("... {} more (use --limit)", visible.len() - shown.len());
    }

    Ok(())
}

/// Resolve the neighbour of `id` within the filtered view.
pub fn find_neighbour(
    config: &Config,
    filters: &FilterSpec,
    id: &str,
    direction: Direction,
) -> Result<Option<LogEntry>> {
    let store = dataset::load_store(config)?;
    let visible = apply_filters(store.entries(), filters);
    let found = match direction {
        Direction::Next => navigate::next(&visible, id),
        Direction::Previous => navigate::previous(&visible, id),
    };
    Ok(found.cloned())
}

/// Run the next / prev commands.
pub fn run_neighbour(
    config: &Config,
    filters: &FilterSpec,
    id: &str,
    direction: Direction,
    format: OutputFormat,
) -> Result<()> {
    let found = find_neighbour(config, filters, id, direction)?;

    match (format, found) {
        (OutputFormat::Json, found) => {
            println!("{}", serde_json::to_string_pretty(&found)?);
        }
        (OutputFormat::Human, Some(e)) => {
            println!(
                "{}  {}  {}",
                e.id,
                e.status.as_str(),
                snippet(e.display_query(), config.display.snippet_chars)
            );
        }
        (OutputFormat::Human, None) => {
            let which = match direction {
                Direction::Next => "next",
                Direction::Previous => "previous",
            };
            eprintln!("No {} entry in the current view.", which);
        }
    }

    Ok(())
}
