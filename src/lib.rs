//! # Chatlog Review
//!
//! A review engine for inspecting and annotating logged chatbot
//! conversations.
//!
//! A reviewer loads a set of logged user-query / bot-response exchanges,
//! narrows them with filters (status, category, source, confidence, free
//! text), walks through the filtered view, and edits review metadata
//! (status, classification, commentary, thumbs up / down). Edits replace
//! whole entries by id in a single-writer in-memory store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Log file    │──▶│  LogStore    │──▶│ Filter/Stats │
//! │  (JSON)      │   │  (in-memory) │   │   engine     │
//! └──────────────┘   └──────┬───────┘   └──────┬───────┘
//!                           │                  │
//!                           ▼                  ▼
//!                    ┌─────────────────────────────┐
//!                    │  ReviewSession / CLI (clr)  │
//!                    └─────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! clr list --status flagged --search disease
//! clr show 2
//! clr vote 2 up
//! clr triage 2
//! clr stats
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`store`] | Log store trait and in-memory implementation |
//! | [`filter`] | Filter predicates and `apply_filters` |
//! | [`stats`] | Aggregate review statistics |
//! | [`navigate`] | Next / previous over a filtered view |
//! | [`session`] | Store + filters + selection |
//! | [`dataset`] | Log-file loading and saving |
//! | [`list`], [`get`], [`review`], [`export`] | CLI commands |

pub mod config;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod get;
pub mod list;
pub mod models;
pub mod navigate;
pub mod output;
pub mod review;
pub mod session;
pub mod stats;
pub mod store;
