//! Export the filtered view as JSON.
//!
//! Produces a JSON array of the entries passing the given filters, in the
//! same format `clr` reads, so an export can be reviewed again as its own
//! log file.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::dataset;
use crate::filter::{apply_filters, FilterSpec};
use crate::models::LogEntry;
use crate::store::LogStore;

/// Export filtered entries as JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(config: &Config, filters: &FilterSpec, output: Option<&Path>) -> Result<()> {
    let store = dataset::load_store(config)?;
    let visible: Vec<LogEntry> = apply_filters(store.entries(), filters)
        .into_iter()
        .cloned()
        .collect();

    match output {
        Some(path) => {
            dataset::save_entries(path, &visible)?;
            eprintln!(
                "Exported {} of {} entries to {}",
                visible.len(),
                store.len(),
                path.display()
            );
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
    }

    Ok(())
}
