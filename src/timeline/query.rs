//! Query engine: compiles an [`EventQuery`] into typed filter predicates and
//! one ordered retrieval.
//!
//! Storage-level predicates (category, date bounds, text search) are
//! AND-combined into a single indexed SELECT with `ORDER BY timestamp DESC`
//! and an optional LIMIT. Tag matching runs afterwards in [`run`], over the
//! decoded JSON tag arrays of the already-narrowed candidate set.
//!
//! Because LIMIT is applied at the storage stage, a query combining `limit`
//! with `tags` can return fewer than `limit` rows. That interaction is part
//! of the contract, not a bug: it keeps tag storage as a single JSON column
//! with no multi-value index, which is the right trade for a personal-scale
//! timeline.

use rusqlite::types::Value;
use rusqlite::Connection;

use crate::error::Result;
use crate::timeline::types::{EventQuery, TimelineEvent};

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, category, timestamp, tags, created_at FROM events";

/// One storage-level filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Exact match on the normalized category column.
    Category(String),
    /// `timestamp >= bound`, lexicographic.
    StartDate(String),
    /// `timestamp <= bound`, lexicographic.
    EndDate(String),
    /// Case-insensitive substring match over title or description.
    SearchText(String),
}

impl Filter {
    /// SQL fragment for this predicate. Placeholders are positional.
    pub fn clause(&self) -> &'static str {
        match self {
            Self::Category(_) => "category = ?",
            Self::StartDate(_) => "timestamp >= ?",
            Self::EndDate(_) => "timestamp <= ?",
            Self::SearchText(_) => "(title LIKE ? OR description LIKE ?)",
        }
    }

    /// Bind parameters for this predicate, in placeholder order.
    pub fn params(&self) -> Vec<String> {
        match self {
            Self::Category(c) | Self::StartDate(c) | Self::EndDate(c) => vec![c.clone()],
            Self::SearchText(text) => {
                let pattern = format!("%{text}%");
                vec![pattern.clone(), pattern]
            }
        }
    }
}

/// Compile the storage-level predicates of a query, in a fixed order.
///
/// The category value is lowercased here so matching is case-insensitive
/// regardless of caller input casing; stored categories are already
/// normalized. Tag filtering is deliberately absent: it runs post-retrieval.
pub fn compile_filters(query: &EventQuery) -> Vec<Filter> {
    let mut filters = Vec::new();

    if let Some(ref category) = query.category {
        filters.push(Filter::Category(category.to_lowercase()));
    }
    if let Some(ref start) = query.start_date {
        filters.push(Filter::StartDate(start.clone()));
    }
    if let Some(ref end) = query.end_date {
        filters.push(Filter::EndDate(end.clone()));
    }
    if let Some(ref text) = query.search_text {
        filters.push(Filter::SearchText(text.clone()));
    }

    filters
}

/// Execute a query: storage filters → order → limit → tag post-filter.
pub fn run(conn: &Connection, query: &EventQuery) -> Result<Vec<TimelineEvent>> {
    let filters = compile_filters(query);

    let mut sql = String::from(SELECT_COLUMNS);
    sql.push_str(" WHERE 1=1");
    let mut params: Vec<Value> = Vec::new();

    for filter in &filters {
        sql.push_str(" AND ");
        sql.push_str(filter.clause());
        params.extend(filter.params().into_iter().map(Value::from));
    }

    // Newest first, always applied
    sql.push_str(" ORDER BY timestamp DESC");

    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        params.push(Value::from(limit as i64));
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(params))?;

    let mut events = Vec::new();
    while let Some(row) = rows.next()? {
        let tags_json: Option<String> = row.get(5)?;
        let tags: Vec<String> = match tags_json {
            Some(ref s) => serde_json::from_str(s)?,
            None => Vec::new(),
        };

        // Match-any tag filter, applied after LIMIT by design (see module doc)
        if let Some(ref wanted) = query.tags {
            if !wanted.is_empty() && !wanted.iter().any(|w| tags.contains(w)) {
                continue;
            }
        }

        events.push(TimelineEvent {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            timestamp: row.get(4)?,
            tags,
            created_at: row.get(6)?,
        });
    }

    Ok(events)
}
