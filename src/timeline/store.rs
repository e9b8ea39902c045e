//! The timeline store: durable CRUD over events in one local SQLite file.
//!
//! [`TimelineStore`] is an explicit instance owning its connection. It is
//! constructed once and passed by reference to every caller (tool layer, CLI),
//! never resolved through a global, which also gives each test its own
//! isolated store. Schema initialization runs once at construction.
//!
//! The store performs no application-level locking; concurrent writers (a CLI
//! and a server process sharing the same file) rely on SQLite's transaction
//! isolation. Calls are not transactionally composed: a query followed by a
//! delete has a small race window, accepted for a single-user tool.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::db;
use crate::error::Result;
use crate::timeline::types::{CategoryStats, EventQuery, TimelineEvent, TimelineSummary};
use crate::timeline::{query, stats};

pub struct TimelineStore {
    conn: Connection,
}

impl TimelineStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            conn: db::open_database(path)?,
        })
    }

    /// Open an isolated in-memory store. Used by tests and tooling.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: db::open_memory_database()?,
        })
    }

    /// Wrap an already-initialized connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert one event and return its assigned id.
    ///
    /// Validates before any I/O. `id` and `created_at` on the input are
    /// ignored; the row gets a fresh id and a store-assigned creation time.
    pub fn insert(&self, event: &TimelineEvent) -> Result<i64> {
        event.validate()?;

        let tags_json = if event.tags.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&event.tags)?)
        };

        self.conn.execute(
            "INSERT INTO events (title, description, category, timestamp, tags) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.title,
                event.description,
                event.category,
                event.timestamp,
                tags_json,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category = %event.category, "event inserted");
        Ok(id)
    }

    /// Delete one event by id. Returns `false` when no row matched.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// Total number of stored events.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// All distinct categories, alphabetically ordered.
    pub fn distinct_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT category FROM events ORDER BY category")?;
        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(categories)
    }

    /// Earliest and latest stored timestamps, or `None` on an empty table.
    ///
    /// Comparison is lexicographic on the stored strings, per the ordering
    /// contract in [`crate::timeline::types::TimelineEvent`].
    pub fn date_range(&self) -> Result<Option<(String, String)>> {
        let (min, max): (Option<String>, Option<String>) = self.conn.query_row(
            "SELECT MIN(timestamp), MAX(timestamp) FROM events",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match (min, max) {
            (Some(earliest), Some(latest)) => Some((earliest, latest)),
            _ => None,
        })
    }

    /// Delete every event. Returns the number of rows removed.
    pub fn clear_all(&self) -> Result<u64> {
        let removed = self.conn.execute("DELETE FROM events", [])?;
        tracing::info!(removed, "timeline cleared");
        Ok(removed as u64)
    }

    /// Run a filtered, ordered query. See [`crate::timeline::query`].
    pub fn query_events(&self, query: &EventQuery) -> Result<Vec<TimelineEvent>> {
        query::run(&self.conn, query)
    }

    /// The `limit` most recent events, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<TimelineEvent>> {
        self.query_events(&EventQuery::recent(limit))
    }

    /// Per-category statistics, ordered by count descending.
    pub fn category_stats(&self) -> Result<Vec<CategoryStats>> {
        stats::category_stats(&self.conn)
    }

    /// Whole-timeline summary: total, per-category stats, date range.
    pub fn summary(&self) -> Result<TimelineSummary> {
        stats::timeline_summary(&self.conn)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelineError;

    fn test_store() -> TimelineStore {
        TimelineStore::open_in_memory().unwrap()
    }

    fn event(title: &str, category: &str, timestamp: &str) -> TimelineEvent {
        TimelineEvent::new(title, None, category, timestamp, &[]).unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = test_store();
        let a = store.insert(&event("First", "personal", "2025-01-01")).unwrap();
        let b = store.insert(&event("Second", "personal", "2025-01-02")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn insert_assigns_created_at() {
        let store = test_store();
        store.insert(&event("Logged", "personal", "2025-01-01")).unwrap();
        let events = store.recent(1).unwrap();
        assert!(events[0].created_at.is_some());
    }

    #[test]
    fn insert_rejects_invalid_event_before_io() {
        let store = test_store();
        let mut bad = event("Valid", "personal", "2025-01-01");
        bad.title = String::new();
        let err = store.insert(&bad).unwrap_err();
        assert!(matches!(err, TimelineError::Validation(_)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn delete_missing_id_reports_false_without_error() {
        let store = test_store();
        assert!(!store.delete(999).unwrap());
        assert!(!store.delete(999).unwrap()); // still false the second time
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let store = test_store();
        let id = store.insert(&event("Gone soon", "personal", "2025-01-01")).unwrap();
        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn empty_store_behavior() {
        let store = test_store();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.date_range().unwrap().is_none());
        assert!(store.distinct_categories().unwrap().is_empty());
    }

    #[test]
    fn distinct_categories_are_sorted_and_deduplicated() {
        let store = test_store();
        store.insert(&event("A", "travel", "2025-01-01")).unwrap();
        store.insert(&event("B", "career", "2025-01-02")).unwrap();
        store.insert(&event("C", "travel", "2025-01-03")).unwrap();
        assert_eq!(
            store.distinct_categories().unwrap(),
            vec!["career".to_string(), "travel".to_string()]
        );
    }

    #[test]
    fn date_range_spans_min_and_max() {
        let store = test_store();
        store.insert(&event("Mid", "personal", "2025-06-15")).unwrap();
        store.insert(&event("Old", "personal", "2024-01-01")).unwrap();
        store.insert(&event("New", "personal", "2025-12-31")).unwrap();
        assert_eq!(
            store.date_range().unwrap(),
            Some(("2024-01-01".to_string(), "2025-12-31".to_string()))
        );
    }

    #[test]
    fn clear_all_returns_removed_count() {
        let store = test_store();
        for day in 1..=4 {
            store
                .insert(&event("E", "personal", &format!("2025-01-0{day}")))
                .unwrap();
        }
        assert_eq!(store.clear_all().unwrap(), 4);
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.clear_all().unwrap(), 0);
    }

    #[test]
    fn tags_round_trip_through_json_column() {
        let store = test_store();
        let with_tags = TimelineEvent::new(
            "Tagged",
            None,
            "learning",
            "2025-02-02",
            &["Rust".to_string(), "sqlite".to_string()],
        )
        .unwrap();
        store.insert(&with_tags).unwrap();

        let events = store.recent(1).unwrap();
        assert_eq!(events[0].tags, vec!["rust".to_string(), "sqlite".to_string()]);
    }
}
