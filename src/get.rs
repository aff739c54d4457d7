//! Entry retrieval by ID.
//!
//! Used by the `clr show` command to print a single entry with its full
//! content, review metadata, and conversation history.

use anyhow::Result;

use crate::config::Config;
use crate::dataset;
use crate::models::{LogEntry, Vote};
use crate::output::OutputFormat;
use crate::store::LogStore;

/// Core lookup returning the entry, or `None` when the id is unknown.
pub fn get_entry(config: &Config, id: &str) -> Result<Option<LogEntry>> {
    let store = dataset::load_store(config)?;
    Ok(store.get(id).cloned())
}

/// CLI entry point. Looks up the entry and prints it to stdout.
pub fn run_get(config: &Config, id: &str, format: OutputFormat) -> Result<()> {
    let entry = match get_entry(config, id)? {
        Some(e) => e,
        None => {
            eprintln!("Error: entry not found: {}", id);
            std::process::exit(1);
        }
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    println!("--- Entry ---");
    println!("id:              {}", entry.id);
    println!("status:          {}", entry.status.label());
    println!(
        "timestamp:       {}",
        entry.timestamp.format("%Y-%m-%dT%H:%M:%SZ")
    );
    println!("conversation_id: {}", entry.conversation_id);
    println!("source:          {}", entry.chatbot_source);
    if let Some(ref lang) = entry.original_language {
        println!("language:        {}", lang.to_uppercase());
    }
    if let Some(ref c) = entry.category {
        println!("category:        {}", c);
    }
    if let Some(ref q) = entry.question_type {
        println!("question_type:   {}", q);
    }
    if let Some(ref a) = entry.answer_type {
        println!("answer_type:     {}", a);
    }
    if let Some(score) = entry.confidence_score {
        let band = entry
            .confidence_band(
                config.review.high_confidence,
                config.review.medium_confidence,
            )
            .map(|b| b.as_str())
            .unwrap_or("");
        println!("confidence:      {:.0}% ({})", score * 100.0, band);
    }
    if !entry.tags.is_empty() {
        println!("tags:            {}", entry.tags.join(", "));
    }
    if let Some(ref ctx) = entry.context {
        if let Some(ref u) = ctx.user_id {
            println!("user_id:         {}", u);
        }
        if let Some(ref s) = ctx.session_id {
            println!("session_id:      {}", s);
        }
        if let Some(n) = ctx.previous_messages {
            println!("previous:        {} messages", n);
        }
    }
    println!();

    if !entry.conversation_history.is_empty() {
        println!("--- History ({}) ---", entry.conversation_history.len());
        for m in &entry.conversation_history {
            println!("[{:?}] {}", m.role, m.content_english);
            if m.content_original != m.content_english {
                println!("    original ({}): {}", m.language, m.content_original);
            }
        }
        println!();
    }

    println!("--- Query ---");
    println!("{}", entry.display_query());
    if entry.user_query_english.is_some() && entry.display_query() != entry.user_query {
        println!("original: {}", entry.user_query);
    }
    if let Some(ref url) = entry.audio_url {
        println!("audio: {}", url);
    }
    if let Some(ref url) = entry.image_url {
        println!("image: {}", url);
    }
    println!();

    println!("--- Response ---");
    println!("{}", entry.display_response());
    if entry.bot_response_english.is_some() && entry.display_response() != entry.bot_response {
        println!("original: {}", entry.bot_response);
    }
    println!();

    println!("--- Review ---");
    let vote = match entry.vote() {
        Some(Vote::Up) => "up",
        Some(Vote::Down) => "down",
        None => "none",
    };
    println!("vote:            {}", vote);
    println!(
        "classification:  {}",
        entry.classification.as_deref().unwrap_or("(none)")
    );
    println!(
        "commentary:      {}",
        entry.commentary.as_deref().unwrap_or("(none)")
    );

    Ok(())
}
