//! CLI `remind` command: set a reminder from the terminal.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::reminders;
use crate::timeline::store::TimelineStore;

pub fn remind(
    config: &LifelogConfig,
    title: &str,
    due_date: &str,
    description: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;

    let id = reminders::set_reminder(&store, title, description, due_date, &tags)?;
    println!("Reminder #{id} '{title}' set for {due_date}.");
    Ok(())
}
