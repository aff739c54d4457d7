//! Library-level tests for the store, filter, stats, and navigation
//! operations over the 8-entry seed log set.

use std::path::PathBuf;

use chatlog_review::dataset::load_entries;
use chatlog_review::filter::{apply_filters, FilterSpec};
use chatlog_review::models::{LogEntry, ReviewStatus, Vote};
use chatlog_review::navigate::{next, position, previous};
use chatlog_review::session::ReviewSession;
use chatlog_review::stats::compute_stats;
use chatlog_review::store::memory::InMemoryLogStore;
use chatlog_review::store::LogStore;

fn seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/seed_logs.json")
}

fn seed() -> Vec<LogEntry> {
    load_entries(&seed_path()).unwrap()
}

fn seed_store() -> InMemoryLogStore {
    InMemoryLogStore::from_entries(seed()).unwrap()
}

fn ids(entries: &[&LogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

/// Every spec exercised by the property checks below.
fn specs() -> Vec<FilterSpec> {
    vec![
        FilterSpec::new(),
        FilterSpec::new().with_status(ReviewStatus::Flagged),
        FilterSpec::new()
            .with_status(ReviewStatus::Approved)
            .with_status(ReviewStatus::Unreviewed),
        FilterSpec::new().with_search("RAINY"),
        FilterSpec::new().with_search("vague"),
        FilterSpec::new().with_category("pest_disease"),
        FilterSpec::new().with_source("Malawi").with_source("Kenya"),
        FilterSpec::new().with_confidence(0.6, 0.9),
        FilterSpec::new().with_confidence(0.9, 0.6),
        FilterSpec::new()
            .with_status(ReviewStatus::Flagged)
            .with_source("Uganda")
            .with_confidence(0.0, 1.0),
    ]
}

#[test]
fn seed_has_expected_status_counts() {
    let stats = compute_stats(&seed());
    assert_eq!(stats.total, 8);
    assert_eq!(stats.count(ReviewStatus::Approved), 2);
    assert_eq!(stats.count(ReviewStatus::Flagged), 3);
    assert_eq!(stats.count(ReviewStatus::NeedsReview), 1);
    assert_eq!(stats.count(ReviewStatus::Unreviewed), 2);
    assert_eq!(stats.count(ReviewStatus::Triaged), 0);
    assert_eq!(stats.per_status.values().sum::<usize>(), 8);
    assert_eq!(stats.reviewed, 4);
}

#[test]
fn flagged_disease_scenario() {
    let entries = seed();
    let spec = FilterSpec::new()
        .with_status(ReviewStatus::Flagged)
        .with_search("disease");
    let out = apply_filters(&entries, &spec);
    assert_eq!(ids(&out), vec!["2", "5"]);

    let expected: Vec<&LogEntry> = entries
        .iter()
        .filter(|e| {
            let hay = format!(
                "{} {} {}",
                e.user_query,
                e.bot_response,
                e.commentary.as_deref().unwrap_or("")
            )
            .to_lowercase();
            e.status == ReviewStatus::Flagged && hay.contains("disease")
        })
        .collect();
    assert_eq!(out, expected);
}

#[test]
fn empty_spec_is_identity() {
    let entries = seed();
    let out = apply_filters(&entries, &FilterSpec::default());
    let all: Vec<&LogEntry> = entries.iter().collect();
    assert_eq!(out, all);
}

#[test]
fn results_are_ordered_subsequence() {
    let entries = seed();
    for spec in specs() {
        let out = apply_filters(&entries, &spec);
        let mut cursor = 0;
        for e in &out {
            let found = entries[cursor..]
                .iter()
                .position(|x| std::ptr::eq(x, *e))
                .unwrap_or_else(|| panic!("{} out of order for {:?}", e.id, spec));
            cursor += found + 1;
        }
    }
}

#[test]
fn kept_iff_all_predicates_hold() {
    let entries = seed();
    for spec in specs() {
        let out = apply_filters(&entries, &spec);
        for e in &entries {
            let kept = out.iter().any(|o| o.id == e.id);
            assert_eq!(kept, spec.matches(e), "entry {} under {:?}", e.id, spec);
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let entries = seed();
    for spec in specs() {
        assert_eq!(apply_filters(&entries, &spec), apply_filters(&entries, &spec));
    }
}

#[test]
fn confidence_range_excludes_unscored() {
    let entries = seed();
    let out = apply_filters(&entries, &FilterSpec::new().with_confidence(0.6, 0.9));
    assert_eq!(ids(&out), vec!["2", "4", "7"]);

    let full = apply_filters(&entries, &FilterSpec::new().with_confidence(0.0, 1.0));
    assert_eq!(full.len(), 5);
}

#[test]
fn inverted_range_matches_nothing() {
    let entries = seed();
    assert!(apply_filters(&entries, &FilterSpec::new().with_confidence(0.9, 0.6)).is_empty());
}

#[test]
fn toggle_up_on_thumbs_down_entry() {
    let mut store = seed_store();
    let mut e = store.get("3").unwrap().clone();
    e.thumbs_down = Some(true);
    assert!(store.replace(e));

    assert!(store.toggle_review("3", Vote::Up));
    let e = store.get("3").unwrap();
    assert_eq!(e.thumbs_up, Some(true));
    assert_eq!(e.thumbs_down, Some(false));
}

#[test]
fn triage_changes_only_status() {
    let mut store = seed_store();
    let before = store.get("5").unwrap().clone();
    assert!(store.triage("5"));

    let after = store.get("5").unwrap().clone();
    assert_eq!(after.status, ReviewStatus::Triaged);
    let restored = LogEntry {
        status: before.status,
        ..after
    };
    assert_eq!(restored, before);
}

#[test]
fn replace_unknown_id_leaves_store_unchanged() {
    let mut store = seed_store();
    let before = store.entries().to_vec();
    assert!(!store.replace(LogEntry::new("99", "Kenya", "q", "r")));
    assert_eq!(store.len(), 8);
    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn next_of_last_filtered_is_none() {
    let entries = seed();
    let view = apply_filters(&entries, &FilterSpec::new().with_status(ReviewStatus::Flagged));
    let last_id = view.last().unwrap().id.clone();
    assert_eq!(last_id, "7");
    assert!(next(&view, &last_id).is_none());
    assert_eq!(previous(&view, &last_id).map(|e| e.id.as_str()), Some("5"));
    assert_eq!(position(&view, "5"), Some((2, 3)));
}

#[test]
fn session_review_walkthrough() {
    let mut session = ReviewSession::new(seed_store());
    session.set_filters(FilterSpec::new().with_source("Uganda"));
    assert_eq!(ids(&session.visible()), vec!["2", "5", "8"]);

    assert!(session.select("2"));
    assert!(session.vote_selected(Vote::Down));
    let next = session.select_next().map(|e| e.id.clone());
    assert_eq!(next.as_deref(), Some("5"));
    assert!(session.triage_selected());

    let mut edited = session.selected().unwrap().clone();
    edited.classification = Some("Disease Identification".to_string());
    assert!(session.save(edited));

    let stats = session.stats();
    assert_eq!(stats.count(ReviewStatus::Triaged), 1);
    assert_eq!(stats.count(ReviewStatus::Flagged), 2);
    assert_eq!(stats.thumbs_down, 1);
    assert_eq!(stats.total, 8);
}
