//! CLI `export` command: dump the whole timeline as JSON.

use anyhow::Result;
use serde::Serialize;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;
use crate::timeline::types::{EventQuery, TimelineEvent};

/// Export format: wraps all events.
#[derive(Debug, Serialize)]
struct ExportData {
    events: Vec<TimelineEvent>,
}

/// Export every event as JSON to stdout, oldest timestamps last (the query
/// engine's newest-first order).
pub fn export(config: &LifelogConfig) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;

    let query = EventQuery {
        limit: None,
        ..Default::default()
    };
    let events = store.query_events(&query)?;

    let data = ExportData { events };
    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!("Exported {} event(s).", data.events.len());
    Ok(())
}
