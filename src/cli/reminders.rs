//! CLI `reminders` command: list reminders due soon.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::reminders;
use crate::timeline::store::TimelineStore;

pub fn reminders(config: &LifelogConfig, days: Option<i64>) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;
    let days = days.unwrap_or(config.query.reminder_lookahead_days);

    let entries = reminders::upcoming_reminders(&store, days)?;
    if entries.is_empty() {
        println!("No reminders due in the next {days} day(s).");
        return Ok(());
    }

    println!("Reminders due in the next {days} day(s):");
    for entry in entries {
        println!("  #{} {} (due {})", entry.id, entry.title, entry.due_date);
        if let Some(ref description) = entry.description {
            println!("     {description}");
        }
        if !entry.tags.is_empty() {
            println!("     tags: {}", entry.tags.join(", "));
        }
    }
    Ok(())
}
