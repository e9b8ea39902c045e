//! Reminder projection: a future task encoded as a timeline event.
//!
//! A reminder is not a separate entity: it is a [`TimelineEvent`] in the
//! reserved `"reminder"` category, with a fixed title prefix and its
//! timestamp pinned to 09:00 on the due date so reminders sharing a day
//! order consistently. The store and query engine know nothing about it.

use chrono::{Duration, Local};

use crate::error::{Result, TimelineError};
use crate::timeline::store::TimelineStore;
use crate::timeline::types::{EventQuery, ReminderEntry, TimelineEvent};

/// Reserved category for reminders.
pub const REMINDER_CATEGORY: &str = "reminder";

/// Marker prepended to every reminder title.
pub const REMINDER_TITLE_PREFIX: &str = "REMINDER: ";

/// Fixed time-of-day encoded into reminder timestamps.
const REMINDER_DUE_TIME: &str = "09:00:00";

/// Cap on reminders returned by an upcoming-window query.
const UPCOMING_LIMIT: usize = 100;

/// Store a reminder due on `due_date` (a YYYY-MM-DD date string).
/// Returns the assigned event id.
pub fn set_reminder(
    store: &TimelineStore,
    title: &str,
    description: Option<String>,
    due_date: &str,
    tags: &[String],
) -> Result<i64> {
    if title.trim().is_empty() {
        return Err(TimelineError::Validation("title must not be empty".into()));
    }
    if due_date.trim().is_empty() {
        return Err(TimelineError::Validation(
            "due date must not be empty".into(),
        ));
    }

    let event = TimelineEvent::new(
        format!("{REMINDER_TITLE_PREFIX}{title}"),
        description,
        REMINDER_CATEGORY,
        format!("{due_date}T{REMINDER_DUE_TIME}"),
        tags,
    )?;

    store.insert(&event)
}

/// Reminders falling within the next `days_ahead` days. Results keep the
/// query engine's ordering (latest due date first).
pub fn upcoming_reminders(store: &TimelineStore, days_ahead: i64) -> Result<Vec<ReminderEntry>> {
    let now = Local::now().naive_local();
    let start = now.format("%Y-%m-%dT%H:%M:%S").to_string();
    let end = (now + Duration::days(days_ahead))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();
    upcoming_between(store, &start, &end)
}

/// Window-bounded variant of [`upcoming_reminders`] with explicit bounds,
/// for callers (and tests) that control the clock.
pub fn upcoming_between(
    store: &TimelineStore,
    start: &str,
    end: &str,
) -> Result<Vec<ReminderEntry>> {
    let query = EventQuery {
        category: Some(REMINDER_CATEGORY.into()),
        start_date: Some(start.into()),
        end_date: Some(end.into()),
        limit: Some(UPCOMING_LIMIT),
        ..Default::default()
    };

    let entries = store
        .query_events(&query)?
        .into_iter()
        .map(|event| {
            let due_date = event
                .timestamp
                .get(..10)
                .unwrap_or(&event.timestamp)
                .to_string();
            ReminderEntry {
                id: event.id.unwrap_or_default(),
                title: event.title,
                description: event.description,
                due_date,
                tags: event.tags,
            }
        })
        .collect();

    Ok(entries)
}
