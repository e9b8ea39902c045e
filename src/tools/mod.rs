pub mod clear_events;
pub mod delete_event;
pub mod list_categories;
pub mod log_event;
pub mod query_events;
pub mod recent_events;
pub mod set_reminder;
pub mod timeline_stats;
pub mod upcoming_reminders;

use std::sync::{Arc, Mutex};

use clear_events::ClearEventsParams;
use delete_event::DeleteEventParams;
use list_categories::ListCategoriesParams;
use log_event::LogEventParams;
use query_events::QueryEventsParams;
use recent_events::RecentEventsParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use set_reminder::SetReminderParams;
use timeline_stats::TimelineStatsParams;
use upcoming_reminders::UpcomingRemindersParams;

use crate::config::LifelogConfig;
use crate::timeline::reminders;
use crate::timeline::store::TimelineStore;
use crate::timeline::types::{EventQuery, TimelineEvent};

/// The lifelog MCP tool handler. Holds shared state (store, config) and
/// exposes all MCP tools via the `#[tool_router]` macro.
///
/// The store is an explicit shared handle; tools never reach for a global.
/// Every DB call runs under `spawn_blocking` because rusqlite is synchronous.
#[derive(Clone)]
pub struct LifelogTools {
    tool_router: ToolRouter<Self>,
    store: Arc<Mutex<TimelineStore>>,
    config: Arc<LifelogConfig>,
}

/// Run a closure against the locked store on the blocking pool.
async fn with_store<T, F>(store: Arc<Mutex<TimelineStore>>, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&TimelineStore) -> crate::error::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let store = store
            .lock()
            .map_err(|e| format!("store lock poisoned: {e}"))?;
        f(&store).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("db task failed: {e}"))?
}

#[tool_router]
impl LifelogTools {
    pub fn new(store: Arc<Mutex<TimelineStore>>, config: Arc<LifelogConfig>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            store,
            config,
        }
    }

    /// Record a new event on the user's personal timeline.
    #[tool(description = "Log a new event to the user's personal timeline. Category and timestamp default to the configured category and the current time.")]
    async fn log_event(
        &self,
        Parameters(params): Parameters<LogEventParams>,
    ) -> Result<String, String> {
        let category = params
            .category
            .unwrap_or_else(|| self.config.storage.default_category.clone());
        let timestamp = params
            .timestamp
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());
        let tags = params.tags.unwrap_or_default();

        tracing::info!(title = %params.title, category = %category, "log_event called");

        let title = params.title;
        let description = params.description;
        let id = with_store(Arc::clone(&self.store), move |store| {
            let event = TimelineEvent::new(title, description, &category, timestamp, &tags)?;
            store.insert(&event)
        })
        .await?;

        tracing::info!(id, "event logged");
        serde_json::to_string(&serde_json::json!({ "id": id }))
            .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Query timeline events with any combination of filters.
    #[tool(description = "Query timeline events by date range, category, tags, and/or free text. Returns events newest first.")]
    async fn query_events(
        &self,
        Parameters(params): Parameters<QueryEventsParams>,
    ) -> Result<String, String> {
        let query = EventQuery {
            search_text: params.search_text,
            category: params.category,
            start_date: params.start_date,
            end_date: params.end_date,
            tags: params.tags,
            limit: Some(params.limit.unwrap_or(self.config.query.default_limit)),
        };

        tracing::info!(?query, "query_events called");

        let events =
            with_store(Arc::clone(&self.store), move |store| store.query_events(&query)).await?;

        serde_json::to_string(&events).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Retrieve the most recent timeline events.
    #[tool(description = "Get the most recent timeline events, newest first.")]
    async fn recent_events(
        &self,
        Parameters(params): Parameters<RecentEventsParams>,
    ) -> Result<String, String> {
        let limit = params.limit.unwrap_or(self.config.query.recent_limit);
        tracing::info!(limit, "recent_events called");

        let events = with_store(Arc::clone(&self.store), move |store| store.recent(limit)).await?;

        serde_json::to_string(&events).map_err(|e| format!("serialization failed: {e}"))
    }

    /// List every category currently in use.
    #[tool(description = "Get the list of all categories currently in use, alphabetically ordered.")]
    async fn list_categories(
        &self,
        Parameters(_params): Parameters<ListCategoriesParams>,
    ) -> Result<String, String> {
        let categories =
            with_store(Arc::clone(&self.store), |store| store.distinct_categories()).await?;

        serde_json::to_string(&categories).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Summarize the whole timeline.
    #[tool(description = "Get timeline statistics: total event count, per-category counts with earliest/latest timestamps, and the overall date range.")]
    async fn timeline_stats(
        &self,
        Parameters(_params): Parameters<TimelineStatsParams>,
    ) -> Result<String, String> {
        let summary = with_store(Arc::clone(&self.store), |store| store.summary()).await?;

        serde_json::to_string(&summary).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Delete a single event by id.
    #[tool(description = "Delete one timeline event by ID. Reports whether an event was actually removed.")]
    async fn delete_event(
        &self,
        Parameters(params): Parameters<DeleteEventParams>,
    ) -> Result<String, String> {
        let id = params.id;
        tracing::info!(id, "delete_event called");

        let deleted = with_store(Arc::clone(&self.store), move |store| store.delete(id)).await?;

        serde_json::to_string(&serde_json::json!({ "id": id, "deleted": deleted }))
            .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Delete every event. Requires explicit confirmation.
    #[tool(description = "Delete ALL timeline events. Requires confirm=true as a safety gate. Returns the number of events removed.")]
    async fn clear_events(
        &self,
        Parameters(params): Parameters<ClearEventsParams>,
    ) -> Result<String, String> {
        if params.confirm != Some(true) {
            return Err("clear_events requires confirm=true".into());
        }

        let removed = with_store(Arc::clone(&self.store), |store| store.clear_all()).await?;
        tracing::info!(removed, "timeline cleared via tool");

        serde_json::to_string(&serde_json::json!({ "removed": removed }))
            .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Store a reminder for a future task.
    #[tool(description = "Set a reminder for a future task. due_date must be a YYYY-MM-DD date; the reminder lands on the timeline in the 'reminder' category.")]
    async fn set_reminder(
        &self,
        Parameters(params): Parameters<SetReminderParams>,
    ) -> Result<String, String> {
        tracing::info!(title = %params.title, due = %params.due_date, "set_reminder called");

        let title = params.title;
        let description = params.description;
        let due_date = params.due_date;
        let tags = params.tags.unwrap_or_default();
        let id = with_store(Arc::clone(&self.store), move |store| {
            reminders::set_reminder(store, &title, description, &due_date, &tags)
        })
        .await?;

        serde_json::to_string(&serde_json::json!({ "id": id }))
            .map_err(|e| format!("serialization failed: {e}"))
    }

    /// Reminders falling due within the lookahead window.
    #[tool(description = "Get all upcoming reminders within the next N days (default 30). Each entry carries its due date.")]
    async fn upcoming_reminders(
        &self,
        Parameters(params): Parameters<UpcomingRemindersParams>,
    ) -> Result<String, String> {
        let days_ahead = params
            .days_ahead
            .unwrap_or(self.config.query.reminder_lookahead_days);
        tracing::info!(days_ahead, "upcoming_reminders called");

        let entries = with_store(Arc::clone(&self.store), move |store| {
            reminders::upcoming_reminders(store, days_ahead)
        })
        .await?;

        serde_json::to_string(&entries).map_err(|e| format!("serialization failed: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for LifelogTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "lifelog is a personal timeline server. Use log_event to record life \
                 events, query_events or recent_events to look back, set_reminder and \
                 upcoming_reminders for future tasks, and timeline_stats for an overview."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
