//! Core timeline type definitions.
//!
//! Defines [`TimelineEvent`] (the sole persisted entity), [`EventQuery`]
//! (request-scoped filter parameters), [`CategoryStats`] / [`TimelineSummary`]
//! (derived read models), and the category/tag normalization rules applied
//! before persistence.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// Category applied by callers when the user does not name one.
///
/// Categories are an open set; this list is conventional, not enforced:
/// career, travel, health, personal, learning, social, milestone, creative,
/// financial, reminder.
pub const DEFAULT_CATEGORY: &str = "personal";

/// Default result cap for [`EventQuery`].
pub const DEFAULT_QUERY_LIMIT: usize = 50;

/// One recorded life occurrence (or reminder), matching the `events` table.
///
/// `timestamp` is "when the event occurred", not when it was recorded, and is
/// stored verbatim as an ISO-8601 string. Ordering is lexicographic on that
/// string, which holds as long as timestamps share one zero-padded format;
/// the store does not parse them chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Rowid assigned by the store on insert; `None` before insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Brief non-empty title.
    pub title: String,
    /// Optional free-text detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Normalized (lowercase, trimmed) category.
    pub category: String,
    /// ISO-8601 event time, accepted verbatim.
    pub timestamp: String,
    /// Normalized, deduplicated tags. Order carries no meaning.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Record-creation time, assigned by the store. Immutable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TimelineEvent {
    /// Build a canonical event from raw user-supplied fields.
    ///
    /// Normalizes `category` and `tags`, and fails fast with
    /// [`TimelineError::Validation`] when `title` or `timestamp` is empty.
    /// An empty category is allowed here; default substitution is the
    /// caller's responsibility, not the entity's.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        category: &str,
        timestamp: impl Into<String>,
        tags: &[String],
    ) -> Result<Self> {
        let event = Self {
            id: None,
            title: title.into(),
            description,
            category: normalize_category(category),
            timestamp: timestamp.into(),
            tags: normalize_tags(tags),
            created_at: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Check required fields. Called by the store before any I/O.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TimelineError::Validation("title must not be empty".into()));
        }
        if self.timestamp.trim().is_empty() {
            return Err(TimelineError::Validation(
                "timestamp must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Lowercase and trim a category. Idempotent.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lowercase and trim each tag, then deduplicate with set semantics.
///
/// The result order is unspecified by contract; this returns sorted order so
/// repeated normalization is byte-stable.
pub fn normalize_tags(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filter parameters for one query. Carries no state between calls.
///
/// All filters are AND-combined except `tags`, which matches an event when
/// it carries *any* of the requested tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventQuery {
    /// Case-insensitive substring match over title and description.
    pub search_text: Option<String>,
    /// Exact category match (compared lowercase).
    pub category: Option<String>,
    /// Inclusive lower bound on `timestamp` (string comparison).
    pub start_date: Option<String>,
    /// Inclusive upper bound on `timestamp` (string comparison).
    pub end_date: Option<String>,
    /// Match-any tag set, applied after retrieval.
    pub tags: Option<Vec<String>>,
    /// Result cap, applied at the storage stage before tag filtering.
    pub limit: Option<usize>,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search_text: None,
            category: None,
            start_date: None,
            end_date: None,
            tags: None,
            limit: Some(DEFAULT_QUERY_LIMIT),
        }
    }
}

impl EventQuery {
    /// Query for the `limit` most recent events, no other filters.
    pub fn recent(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Per-category aggregate, recomputed on each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_event: Option<String>,
}

/// Whole-timeline aggregate: total count, per-category stats, date range.
#[derive(Debug, Serialize)]
pub struct TimelineSummary {
    pub total_events: u64,
    pub categories: Vec<CategoryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<(String, String)>,
}

/// A reminder presented with its due date extracted from the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderEntry {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Date portion (YYYY-MM-DD) of the reminder's timestamp.
    pub due_date: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_lowercased_and_trimmed() {
        assert_eq!(normalize_category("  Travel "), "travel");
        assert_eq!(normalize_category("HEALTH"), "health");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_category(" Career ");
        assert_eq!(normalize_category(&once), once);

        let tags = vec!["Rust".to_string(), " rust ".to_string(), "CLI".to_string()];
        let once = normalize_tags(&tags);
        assert_eq!(normalize_tags(&once), once);
    }

    #[test]
    fn tags_are_deduplicated() {
        let tags = vec![
            "Urgent".to_string(),
            "urgent".to_string(),
            " URGENT ".to_string(),
            "money".to_string(),
        ];
        let normalized = normalize_tags(&tags);
        assert_eq!(normalized, vec!["money".to_string(), "urgent".to_string()]);
    }

    #[test]
    fn empty_tags_are_dropped() {
        let tags = vec!["  ".to_string(), "real".to_string()];
        assert_eq!(normalize_tags(&tags), vec!["real".to_string()]);
    }

    #[test]
    fn new_event_normalizes_fields() {
        let event = TimelineEvent::new(
            "Started new job",
            Some("First day at the office".into()),
            " Career ",
            "2025-03-01T09:00:00",
            &["NewJob".to_string(), "newjob".to_string()],
        )
        .unwrap();

        assert_eq!(event.category, "career");
        assert_eq!(event.tags, vec!["newjob".to_string()]);
        assert!(event.id.is_none());
        assert!(event.created_at.is_none());
    }

    #[test]
    fn missing_title_fails_validation() {
        let err = TimelineEvent::new("   ", None, "personal", "2025-01-01", &[]).unwrap_err();
        assert!(matches!(err, TimelineError::Validation(_)));
    }

    #[test]
    fn missing_timestamp_fails_validation() {
        let err = TimelineEvent::new("Something", None, "personal", "", &[]).unwrap_err();
        assert!(matches!(err, TimelineError::Validation(_)));
    }

    #[test]
    fn empty_category_is_not_auto_corrected() {
        let event = TimelineEvent::new("Untitled day", None, "  ", "2025-01-01", &[]).unwrap();
        assert_eq!(event.category, "");
    }

    #[test]
    fn default_query_limit_is_50() {
        assert_eq!(EventQuery::default().limit, Some(50));
    }
}
