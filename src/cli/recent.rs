//! CLI `recent` command: show the newest events.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;

pub fn recent(config: &LifelogConfig, limit: Option<usize>) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;
    let limit = limit.unwrap_or(config.query.recent_limit);

    let events = store.recent(limit)?;
    super::print_events(&events);
    Ok(())
}
