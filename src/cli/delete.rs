//! CLI `delete` command: remove one event by id.

use anyhow::Result;

use crate::config::LifelogConfig;
use crate::timeline::store::TimelineStore;

pub fn delete(config: &LifelogConfig, id: i64) -> Result<()> {
    let store = TimelineStore::open(config.resolved_db_path())?;

    if store.delete(id)? {
        println!("Deleted event #{id}.");
    } else {
        println!("No event with id {id}.");
    }
    Ok(())
}
