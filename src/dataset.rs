//! Log-file loading and saving.
//!
//! A log file is a JSON array of [`LogEntry`] objects. Loading validates
//! that ids are unique and confidence scores lie in `[0.0, 1.0]`; saving
//! writes pretty-printed JSON, creating parent directories as needed.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::models::LogEntry;
use crate::store::memory::InMemoryLogStore;
use crate::store::LogStore;

/// Read and validate the entries in `path`.
pub fn load_entries(path: &Path) -> Result<Vec<LogEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file: {}", path.display()))?;
    let entries: Vec<LogEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse log file: {}", path.display()))?;

    for e in &entries {
        if let Some(score) = e.confidence_score {
            if !(0.0..=1.0).contains(&score) {
                bail!(
                    "entry {}: confidence_score {} is outside [0.0, 1.0]",
                    e.id,
                    score
                );
            }
        }
    }

    tracing::info!(path = %path.display(), count = entries.len(), "loaded log file");
    Ok(entries)
}

/// Write `entries` to `path` as pretty JSON.
pub fn save_entries(path: &Path, entries: &[LogEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write log file: {}", path.display()))?;

    tracing::info!(path = %path.display(), count = entries.len(), "saved log file");
    Ok(())
}

/// Load the configured log file into a store.
pub fn load_store(config: &Config) -> Result<InMemoryLogStore> {
    let entries = load_entries(&config.logs.path)?;
    InMemoryLogStore::from_entries(entries)
        .with_context(|| format!("Invalid log file: {}", config.logs.path.display()))
}

/// Write the store's entries back to the configured log file.
pub fn save_store<S: LogStore>(config: &Config, store: &S) -> Result<()> {
    save_entries(&config.logs.path, store.entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewStatus;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/logs.json");

        let mut b = LogEntry::new("b", "Uganda", "q2", "r2");
        b.status = ReviewStatus::Flagged;
        b.confidence_score = Some(0.25);
        let entries = vec![LogEntry::new("a", "Kenya", "q1", "r1"), b];

        save_entries(&path, &entries).unwrap();
        let loaded = load_entries(&path).unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logs.json");
        let mut e = LogEntry::new("a", "Kenya", "q", "r");
        e.confidence_score = Some(1.2);
        save_entries(&path, &[e]).unwrap();

        let err = load_entries(&path).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_load_store_rejects_duplicate_ids() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logs.json");
        let e = LogEntry::new("a", "Kenya", "q", "r");
        save_entries(&path, &[e.clone(), e]).unwrap();

        let mut config = Config::minimal();
        config.logs.path = path;
        let err = load_store(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_entries(Path::new("/nonexistent/logs.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read log file"));
    }
}
