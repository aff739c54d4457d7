//! Core data models used throughout Chatlog Review.
//!
//! These types represent the logged conversation turns, their review
//! metadata, and the small closed vocabularies (status, vote, confidence
//! band) that the store, filter engine, and CLI operate on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reviewer-assigned lifecycle tag on an entry.
///
/// There is no enforced transition graph: any status may be set to any
/// other by a direct edit. [`ReviewStatus::Triaged`] is additionally
/// reachable through the one-click triage action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Unreviewed,
    Flagged,
    Approved,
    NeedsReview,
    Triaged,
}

impl ReviewStatus {
    /// Every status, in display order.
    pub const ALL: [ReviewStatus; 5] = [
        ReviewStatus::Unreviewed,
        ReviewStatus::Flagged,
        ReviewStatus::NeedsReview,
        ReviewStatus::Approved,
        ReviewStatus::Triaged,
    ];

    /// Wire name, as stored in log files and accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Unreviewed => "unreviewed",
            ReviewStatus::Flagged => "flagged",
            ReviewStatus::Approved => "approved",
            ReviewStatus::NeedsReview => "needs_review",
            ReviewStatus::Triaged => "triaged",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Unreviewed => "Unreviewed",
            ReviewStatus::Flagged => "Flagged",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::NeedsReview => "Needs Review",
            ReviewStatus::Triaged => "Triaged",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "unreviewed" => Ok(ReviewStatus::Unreviewed),
            "flagged" => Ok(ReviewStatus::Flagged),
            "approved" => Ok(ReviewStatus::Approved),
            "needs_review" => Ok(ReviewStatus::NeedsReview),
            "triaged" => Ok(ReviewStatus::Triaged),
            other => Err(format!(
                "unknown status '{}'. Use unreviewed, flagged, approved, needs_review, or triaged.",
                other
            )),
        }
    }
}

/// A thumbs-up / thumbs-down review vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "+" | "+1" => Ok(Vote::Up),
            "down" | "-" | "-1" => Ok(Vote::Down),
            other => Err(format!("unknown vote '{}'. Use up or down.", other)),
        }
    }
}

/// Coarse bucket for a bot confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Classify `score` against the `high` and `medium` lower bounds.
    pub fn classify(score: f64, high: f64, medium: f64) -> Self {
        if score >= high {
            ConfidenceBand::High
        } else if score >= medium {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

/// Who authored a turn in the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
}

/// One prior turn of the conversation an entry belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub role: MessageRole,
    pub content_original: String,
    pub content_english: String,
    pub language: String,
    pub timestamp: DateTime<Utc>,
}

/// Session context captured alongside an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_messages: Option<u32>,
}

/// One logged user-query / bot-response exchange plus review metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub conversation_id: String,
    pub chatbot_source: String,
    pub user_query: String,
    pub bot_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_query_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_response_english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbs_up: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbs_down: Option<bool>,
    /// Bot confidence in `[0.0, 1.0]`, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversation_history: Vec<ConversationMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<EntryContext>,
}

impl LogEntry {
    /// Build a minimal unreviewed entry. Optional fields start absent.
    pub fn new(
        id: impl Into<String>,
        chatbot_source: impl Into<String>,
        user_query: impl Into<String>,
        bot_response: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            conversation_id: format!("conv_{}", id),
            id,
            timestamp: Utc::now(),
            chatbot_source: chatbot_source.into(),
            user_query: user_query.into(),
            bot_response: bot_response.into(),
            user_query_english: None,
            bot_response_english: None,
            original_language: None,
            status: ReviewStatus::Unreviewed,
            reviewer_id: None,
            classification: None,
            commentary: None,
            category: None,
            question_type: None,
            answer_type: None,
            tags: Vec::new(),
            thumbs_up: None,
            thumbs_down: None,
            confidence_score: None,
            audio_url: None,
            image_url: None,
            conversation_history: Vec::new(),
            context: None,
        }
    }

    /// True when the reviewer has written non-empty commentary.
    pub fn is_reviewed(&self) -> bool {
        self.commentary.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// The vote currently recorded, if exactly one flag is set.
    pub fn vote(&self) -> Option<Vote> {
        match (
            self.thumbs_up.unwrap_or(false),
            self.thumbs_down.unwrap_or(false),
        ) {
            (true, false) => Some(Vote::Up),
            (false, true) => Some(Vote::Down),
            _ => None,
        }
    }

    /// Flip the `vote` flag. Turning a flag on clears the opposite one;
    /// voting the same way twice turns the flag back off.
    pub fn toggle_vote(&mut self, vote: Vote) {
        let up = self.thumbs_up.unwrap_or(false);
        let down = self.thumbs_down.unwrap_or(false);
        match vote {
            Vote::Up => {
                self.thumbs_up = Some(!up);
                self.thumbs_down = Some(if up { down } else { false });
            }
            Vote::Down => {
                self.thumbs_down = Some(!down);
                self.thumbs_up = Some(if down { up } else { false });
            }
        }
    }

    /// Query text preferring the English translation when present.
    pub fn display_query(&self) -> &str {
        self.user_query_english
            .as_deref()
            .unwrap_or(&self.user_query)
    }

    /// Response text preferring the English translation when present.
    pub fn display_response(&self) -> &str {
        self.bot_response_english
            .as_deref()
            .unwrap_or(&self.bot_response)
    }

    /// Confidence band under the given thresholds, if a score is present.
    pub fn confidence_band(&self, high: f64, medium: f64) -> Option<ConfidenceBand> {
        self.confidence_score
            .map(|s| ConfidenceBand::classify(s, high, medium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> LogEntry {
        LogEntry::new("1", "Kenya", "When to plant maize?", "March to May.")
    }

    #[test]
    fn test_status_round_trips_wire_names() {
        for status in ReviewStatus::ALL {
            assert_eq!(status.as_str().parse::<ReviewStatus>().unwrap(), status);
        }
        assert_eq!(
            "Needs Review".parse::<ReviewStatus>().unwrap(),
            ReviewStatus::NeedsReview
        );
        assert!("pending".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ReviewStatus::NeedsReview).unwrap();
        assert_eq!(json, "\"needs_review\"");
    }

    #[test]
    fn test_toggle_up_clears_down() {
        let mut e = make_entry();
        e.thumbs_down = Some(true);
        e.toggle_vote(Vote::Up);
        assert_eq!(e.thumbs_up, Some(true));
        assert_eq!(e.thumbs_down, Some(false));
        assert_eq!(e.vote(), Some(Vote::Up));
    }

    #[test]
    fn test_toggle_same_vote_twice_turns_off() {
        let mut e = make_entry();
        e.toggle_vote(Vote::Down);
        assert_eq!(e.vote(), Some(Vote::Down));
        e.toggle_vote(Vote::Down);
        assert_eq!(e.thumbs_down, Some(false));
        assert_eq!(e.vote(), None);
    }

    #[test]
    fn test_toggle_self_corrects_both_set() {
        let mut e = make_entry();
        e.thumbs_up = Some(true);
        e.thumbs_down = Some(true);
        e.toggle_vote(Vote::Up);
        assert!(!(e.thumbs_up.unwrap() && e.thumbs_down.unwrap()));

        let mut e = make_entry();
        e.thumbs_up = Some(true);
        e.thumbs_down = Some(true);
        e.toggle_vote(Vote::Down);
        assert!(!(e.thumbs_up.unwrap() && e.thumbs_down.unwrap()));
    }

    #[test]
    fn test_is_reviewed_requires_non_empty_commentary() {
        let mut e = make_entry();
        assert!(!e.is_reviewed());
        e.commentary = Some(String::new());
        assert!(!e.is_reviewed());
        e.commentary = Some("too vague".to_string());
        assert!(e.is_reviewed());
    }

    #[test]
    fn test_confidence_band_thresholds() {
        assert_eq!(ConfidenceBand::classify(0.8, 0.8, 0.6), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::classify(0.79, 0.8, 0.6), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.6, 0.8, 0.6), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.59, 0.8, 0.6), ConfidenceBand::Low);
        assert_eq!(make_entry().confidence_band(0.8, 0.6), None);
    }

    #[test]
    fn test_display_prefers_english() {
        let mut e = make_entry();
        assert_eq!(e.display_query(), "When to plant maize?");
        e.user_query_english = Some("When should I plant maize?".to_string());
        assert_eq!(e.display_query(), "When should I plant maize?");
        assert_eq!(e.display_response(), "March to May.");
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let json = r#"{
            "id": "9",
            "timestamp": "2024-01-15T10:30:00Z",
            "conversation_id": "conv_009",
            "chatbot_source": "Malawi",
            "user_query": "q",
            "bot_response": "r",
            "status": "flagged",
            "context": { "user_id": "farmer_1", "previous_messages": 2 }
        }"#;
        let e: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.status, ReviewStatus::Flagged);
        assert!(e.commentary.is_none());
        assert!(e.conversation_history.is_empty());
        assert_eq!(e.context.unwrap().previous_messages, Some(2));
    }
}
