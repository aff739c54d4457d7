//! # Chatlog Review CLI (`clr`)
//!
//! The `clr` binary is the presentation layer for Chatlog Review. It loads
//! the configured log file, runs one command against it, and writes the log
//! file back when a command changed an entry.
//!
//! ## Usage
//!
//! ```bash
//! clr --config ./config/clr.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `clr list` | List entries passing the given filters |
//! | `clr stats` | Totals, per-status counts, and breakdowns |
//! | `clr show <id>` | Print a single entry |
//! | `clr next <id>` / `clr prev <id>` | Neighbour within the filtered view |
//! | `clr edit <id>` | Edit status, classification, commentary, category |
//! | `clr triage <id>` | Mark an entry as triaged |
//! | `clr vote <id> up\|down` | Toggle a thumbs-up / thumbs-down vote |
//! | `clr export` | Write the filtered view as JSON |
//! | `clr completions <shell>` | Print shell completions |

use chatlog_review::filter::{ConfidenceRange, FilterSpec};
use chatlog_review::list::Direction;
use chatlog_review::models::{ReviewStatus, Vote};
use chatlog_review::output::OutputFormat;
use chatlog_review::review::EntryEdit;
use chatlog_review::{config, export, get, list, review, stats};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chatlog Review CLI: inspect, filter, and annotate logged chatbot
/// conversations.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, built-in defaults are used.
#[derive(Parser)]
#[command(
    name = "clr",
    about = "Chatlog Review: inspect, filter, and annotate logged chatbot conversations",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/clr.toml")]
    config: PathBuf,

    /// Override the log file path from the config.
    #[arg(long, global = true)]
    logs: Option<PathBuf>,

    /// Output format: `human` or `json`. Defaults to human on a TTY, JSON otherwise.
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Filter flags shared by list, next, prev, and export.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Only entries with this status (repeatable).
    #[arg(long = "status")]
    status: Vec<ReviewStatus>,

    /// Case-insensitive text search over queries, responses, and commentary.
    #[arg(long)]
    search: Option<String>,

    /// Only entries in this category (repeatable).
    #[arg(long = "category")]
    category: Vec<String>,

    /// Only entries from this chatbot source (repeatable).
    #[arg(long = "source")]
    source: Vec<String>,

    /// Lower confidence bound (inclusive). Entries without a score are excluded.
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Upper confidence bound (inclusive). Entries without a score are excluded.
    #[arg(long)]
    max_confidence: Option<f64>,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        spec.search = self.search;
        spec.confidence_range =
            ConfidenceRange::from_bounds(self.min_confidence, self.max_confidence);
        for s in self.status {
            spec = spec.with_status(s);
        }
        for c in self.category {
            spec = spec.with_category(c);
        }
        for s in self.source {
            spec = spec.with_source(s);
        }
        spec
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List entries passing the given filters, in log order.
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of entries to print (default from `[display].list_limit`).
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show totals, per-status counts, votes, and per-source / per-category breakdowns.
    Stats,

    /// Print a single entry with its content and review metadata.
    Show {
        /// Entry id.
        id: String,
    },

    /// Print the entry after `<id>` within the filtered view.
    Next {
        /// Current entry id.
        id: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the entry before `<id>` within the filtered view.
    Prev {
        /// Current entry id.
        id: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Edit an entry's review metadata.
    ///
    /// An empty string clears an optional field, e.g. `--classification ""`.
    Edit {
        /// Entry id.
        id: String,

        #[arg(long)]
        status: Option<ReviewStatus>,

        #[arg(long)]
        classification: Option<String>,

        #[arg(long)]
        commentary: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Reviewer identifier recorded on the entry.
        #[arg(long)]
        reviewer: Option<String>,
    },

    /// Mark an entry as triaged, leaving every other field untouched.
    Triage {
        /// Entry id.
        id: String,
    },

    /// Toggle a thumbs-up / thumbs-down vote on an entry.
    ///
    /// Voting one way clears the other; voting the same way twice clears the vote.
    Vote {
        /// Entry id.
        id: String,

        /// `up` or `down`.
        vote: Vote,
    },

    /// Write the filtered view as a JSON log file.
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output path. Writes to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print shell completions for `clr`.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Commands that don't require config
    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "clr", &mut std::io::stdout());
        return Ok(());
    }

    let mut cfg = config::load_config_or_default(&cli.config)?;
    if let Some(path) = cli.logs {
        cfg.logs.path = path;
    }
    let format = cli.format.unwrap_or_else(OutputFormat::default_for_tty);

    match cli.command {
        Commands::List { filters, limit } => {
            list::run_list(&cfg, &filters.into_spec(), limit, format)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg, format)?;
        }
        Commands::Show { id } => {
            get::run_get(&cfg, &id, format)?;
        }
        Commands::Next { id, filters } => {
            list::run_neighbour(&cfg, &filters.into_spec(), &id, Direction::Next, format)?;
        }
        Commands::Prev { id, filters } => {
            list::run_neighbour(&cfg, &filters.into_spec(), &id, Direction::Previous, format)?;
        }
        Commands::Edit {
            id,
            status,
            classification,
            commentary,
            category,
            reviewer,
        } => {
            let edit = EntryEdit {
                status,
                classification,
                commentary,
                category,
                reviewer_id: reviewer,
            };
            review::run_edit(&cfg, &id, &edit)?;
        }
        Commands::Triage { id } => {
            review::run_triage(&cfg, &id)?;
        }
        Commands::Vote { id, vote } => {
            review::run_vote(&cfg, &id, vote)?;
        }
        Commands::Export { filters, output } => {
            export::run_export(&cfg, &filters.into_spec(), output.as_deref())?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
