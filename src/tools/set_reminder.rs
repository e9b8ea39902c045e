//! MCP `set_reminder` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `set_reminder` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetReminderParams {
    #[schemars(description = "Brief title for the reminder")]
    pub title: String,

    #[schemars(description = "What needs to be done")]
    pub description: Option<String>,

    #[schemars(description = "Date the reminder is due (YYYY-MM-DD)")]
    pub due_date: String,

    #[schemars(description = "Optional tags like 'urgent' or 'subscription'")]
    pub tags: Option<Vec<String>>,
}
