//! CLI `import` command: load events from an export file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;
use crate::timeline::types::TimelineEvent;

#[derive(Debug, Deserialize)]
struct ImportData {
    events: Vec<TimelineEvent>,
}

/// Import events from a JSON file produced by `lifelog export`.
///
/// Imported events get fresh ids and creation times; category and tags are
/// re-normalized on the way in so hand-edited files stay canonical.
pub fn import(config: &LifelogConfig, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let data: ImportData =
        serde_json::from_str(&contents).with_context(|| "failed to parse export JSON")?;

    let store = TimelineStore::open(config.resolved_db_path())?;

    let mut imported = 0usize;
    for raw in data.events {
        let event = TimelineEvent::new(
            raw.title,
            raw.description,
            &raw.category,
            raw.timestamp,
            &raw.tags,
        )?;
        store.insert(&event)?;
        imported += 1;
    }

    println!("Imported {imported} event(s) from {}.", path.display());
    Ok(())
}
