//! CLI `reset` command: delete all events after user confirmation.

use std::io::Write;

use anyhow::{bail, Result};

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;

/// Delete every event after user confirmation.
pub fn reset(config: &LifelogConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL timeline events and reminders.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let store = TimelineStore::open(&db_path)?;
    let removed = store.clear_all()?;

    println!("Deleted {removed} event(s). Timeline reset complete.");
    Ok(())
}
