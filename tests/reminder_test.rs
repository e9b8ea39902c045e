mod helpers;

use helpers::test_store;
use lifelog::timeline::reminders::{set_reminder, upcoming_between};
use lifelog::timeline::types::EventQuery;

#[test]
fn reminder_lands_on_timeline_with_fixed_shape() {
    let store = test_store();
    let id = set_reminder(
        &store,
        "Cancel Netflix",
        Some("Before the renewal hits".into()),
        "2025-11-18",
        &["subscription".to_string()],
    )
    .unwrap();

    let query = EventQuery {
        category: Some("reminder".into()),
        ..Default::default()
    };
    let events = store.query_events(&query).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, Some(id));
    assert_eq!(events[0].category, "reminder");
    assert_eq!(events[0].title, "REMINDER: Cancel Netflix");
    assert_eq!(events[0].timestamp, "2025-11-18T09:00:00");
    assert_eq!(events[0].tags, vec!["subscription".to_string()]);
}

#[test]
fn thirty_day_window_includes_due_reminder() {
    let store = test_store();
    set_reminder(&store, "Cancel Netflix", None, "2025-11-18", &[]).unwrap();

    // "today" is before the due date; window extends 30 days out
    let entries = upcoming_between(&store, "2025-11-10T08:00:00", "2025-12-10T08:00:00").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].due_date, "2025-11-18");
    assert_eq!(entries[0].title, "REMINDER: Cancel Netflix");
}

#[test]
fn window_excludes_overdue_and_distant_reminders() {
    let store = test_store();
    set_reminder(&store, "Overdue", None, "2025-10-01", &[]).unwrap();
    set_reminder(&store, "In window", None, "2025-11-20", &[]).unwrap();
    set_reminder(&store, "Too far out", None, "2026-06-01", &[]).unwrap();

    let entries = upcoming_between(&store, "2025-11-10T08:00:00", "2025-12-10T08:00:00").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "REMINDER: In window");
}

#[test]
fn ordinary_events_never_appear_as_reminders() {
    let store = test_store();
    helpers::insert_event(&store, "Dentist", "health", "2025-11-15T10:00:00", &[]);

    let entries = upcoming_between(&store, "2025-11-01T00:00:00", "2025-12-01T00:00:00").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn reminders_share_the_timeline_store() {
    let store = test_store();
    helpers::insert_event(&store, "Normal event", "personal", "2025-11-01", &[]);
    set_reminder(&store, "Pay rent", None, "2025-11-30", &[]).unwrap();

    // Both live in the same events table
    assert_eq!(store.count().unwrap(), 2);
    let categories = store.distinct_categories().unwrap();
    assert_eq!(categories, vec!["personal".to_string(), "reminder".to_string()]);
}
