pub mod categories;
pub mod delete;
pub mod export;
pub mod import;
pub mod log;
pub mod recent;
pub mod remind;
pub mod reminders;
pub mod reset;
pub mod search;
pub mod stats;

use crate::timeline::types::TimelineEvent;

/// Render a list of events for the terminal, newest first as given.
pub fn print_events(events: &[TimelineEvent]) {
    if events.is_empty() {
        println!("No events found.");
        return;
    }

    for event in events {
        let id = event.id.unwrap_or_default();
        let date = event.timestamp.get(..10).unwrap_or(&event.timestamp);
        println!("  #{id} [{}] {} - {date}", event.category, event.title);

        if let Some(ref description) = event.description {
            println!("     {description}");
        }
        if !event.tags.is_empty() {
            println!("     tags: {}", event.tags.join(", "));
        }
    }
}
