//! Output format selection for CLI commands.
//!
//! Human output is a table or labelled block meant for a terminal; JSON
//! output is meant for scripts. Diagnostics always go to **stderr** so that
//! stdout stays parseable.

use std::str::FromStr;

/// Output mode for the CLI: human-readable or JSON.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Default: human output when stdout is a TTY, otherwise JSON.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Human
        } else {
            OutputFormat::Json
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}'. Use human or json.", other)),
        }
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
