//! CLI `categories` command: list categories in use.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;

pub fn categories(config: &LifelogConfig) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;
    let categories = store.distinct_categories()?;

    if categories.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }

    for category in categories {
        println!("  {category}");
    }
    Ok(())
}
