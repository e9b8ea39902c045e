//! CLI `log` command: record one event from the terminal.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;
use crate::timeline::types::TimelineEvent;

/// Insert one event. Category and timestamp fall back to the configured
/// default category and the current local time.
pub fn log(
    config: &LifelogConfig,
    title: &str,
    description: Option<String>,
    category: Option<String>,
    timestamp: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;

    let category = category.unwrap_or_else(|| config.storage.default_category.clone());
    let timestamp = timestamp
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());

    let event = TimelineEvent::new(title, description, &category, timestamp, &tags)?;
    let id = store.insert(&event)?;

    println!(
        "Logged event #{id} '{}' in category '{}' at {}",
        event.title, event.category, event.timestamp
    );
    Ok(())
}
