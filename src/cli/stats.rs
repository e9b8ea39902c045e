//! CLI `stats` command: timeline overview in the terminal.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;

pub fn stats(config: &LifelogConfig) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;
    let summary = store.summary()?;

    println!("Timeline Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total events:      {}", summary.total_events);

    if let Some((earliest, latest)) = summary.date_range {
        println!("  Date range:        {earliest} to {latest}");
    }
    println!();

    if !summary.categories.is_empty() {
        println!("By Category:");
        for stat in &summary.categories {
            println!("  {:<12} {}", stat.category, stat.count);
            if let (Some(earliest), Some(latest)) = (&stat.earliest_event, &stat.latest_event) {
                println!("  {:<12} {earliest} to {latest}", "");
            }
        }
    }

    Ok(())
}
