//! Statistics aggregation: per-category and whole-timeline read models.
//!
//! Everything here is recomputed fresh per call. There is no caching or
//! incremental maintenance: this is a single-user, low-frequency read path.

use rusqlite::Connection;

use crate::error::Result;
use crate::timeline::types::{CategoryStats, TimelineSummary};

/// Per-category count and timestamp span, ordered by count descending.
/// Ties are unordered.
pub fn category_stats(conn: &Connection) -> Result<Vec<CategoryStats>> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) as count, MIN(timestamp), MAX(timestamp) \
         FROM events GROUP BY category ORDER BY count DESC",
    )?;

    let stats = stmt
        .query_map([], |row| {
            Ok(CategoryStats {
                category: row.get(0)?,
                count: row.get::<_, i64>(1)? as u64,
                earliest_event: row.get(2)?,
                latest_event: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(stats)
}

/// Whole-timeline summary: total count, per-category stats, global date range.
pub fn timeline_summary(conn: &Connection) -> Result<TimelineSummary> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;

    let (min, max): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(timestamp), MAX(timestamp) FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    let date_range = match (min, max) {
        (Some(earliest), Some(latest)) => Some((earliest, latest)),
        _ => None,
    };

    Ok(TimelineSummary {
        total_events: total as u64,
        categories: category_stats(conn)?,
        date_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::store::TimelineStore;
    use crate::timeline::types::TimelineEvent;

    fn insert(store: &TimelineStore, title: &str, category: &str, timestamp: &str) {
        let event = TimelineEvent::new(title, None, category, timestamp, &[]).unwrap();
        store.insert(&event).unwrap();
    }

    #[test]
    fn empty_timeline_summary() {
        let store = TimelineStore::open_in_memory().unwrap();
        let summary = timeline_summary(store.conn()).unwrap();
        assert_eq!(summary.total_events, 0);
        assert!(summary.categories.is_empty());
        assert!(summary.date_range.is_none());
    }

    #[test]
    fn category_stats_ordered_by_count_desc() {
        let store = TimelineStore::open_in_memory().unwrap();
        insert(&store, "Trip to Lisbon", "travel", "2025-03-10");
        insert(&store, "Trip to Oslo", "travel", "2025-05-02");
        insert(&store, "Flight home", "travel", "2025-05-09");
        insert(&store, "Promotion", "career", "2025-04-01");

        let stats = category_stats(store.conn()).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, "travel");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[1].category, "career");
        assert_eq!(stats[1].count, 1);
    }

    #[test]
    fn category_stats_track_timestamp_span() {
        let store = TimelineStore::open_in_memory().unwrap();
        insert(&store, "First run", "health", "2025-01-05");
        insert(&store, "Latest run", "health", "2025-07-20");

        let stats = category_stats(store.conn()).unwrap();
        assert_eq!(stats[0].earliest_event.as_deref(), Some("2025-01-05"));
        assert_eq!(stats[0].latest_event.as_deref(), Some("2025-07-20"));
    }

    #[test]
    fn summary_combines_totals_and_range() {
        let store = TimelineStore::open_in_memory().unwrap();
        insert(&store, "Old", "personal", "2024-12-01");
        insert(&store, "New", "career", "2025-06-01");

        let summary = timeline_summary(store.conn()).unwrap();
        assert_eq!(summary.total_events, 2);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(
            summary.date_range,
            Some(("2024-12-01".to_string(), "2025-06-01".to_string()))
        );
    }
}
