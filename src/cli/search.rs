//! CLI `search` command: filtered timeline queries from the terminal.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;
use crate::timeline::types::EventQuery;

#[allow(clippy::too_many_arguments)]
pub fn search(
    config: &LifelogConfig,
    text: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    from: Option<String>,
    to: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;

    let query = EventQuery {
        search_text: text,
        category,
        start_date: from,
        end_date: to,
        tags: if tags.is_empty() { None } else { Some(tags) },
        limit: Some(limit.unwrap_or(config.query.default_limit)),
    };

    let events = store.query_events(&query)?;
    if events.is_empty() {
        println!("No matching events.");
        return Ok(());
    }

    println!("Found {} event(s)\n", events.len());
    super::print_events(&events);
    Ok(())
}
