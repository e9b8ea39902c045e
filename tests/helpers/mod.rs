#![allow(dead_code)]

use lifelog::timeline::store::TimelineStore;
use lifelog::timeline::types::TimelineEvent;

/// Open a fresh in-memory store with schema and migrations applied.
pub fn test_store() -> TimelineStore {
    TimelineStore::open_in_memory().unwrap()
}

/// Insert a test event with the given tags. Returns the assigned id.
pub fn insert_event(
    store: &TimelineStore,
    title: &str,
    category: &str,
    timestamp: &str,
    tags: &[&str],
) -> i64 {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    let event = TimelineEvent::new(title, None, category, timestamp, &tags).unwrap();
    store.insert(&event).unwrap()
}

/// Insert a test event with a description.
pub fn insert_described(
    store: &TimelineStore,
    title: &str,
    description: &str,
    category: &str,
    timestamp: &str,
) -> i64 {
    let event =
        TimelineEvent::new(title, Some(description.to_string()), category, timestamp, &[]).unwrap();
    store.insert(&event).unwrap()
}
