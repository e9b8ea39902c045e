//! MCP `log_event` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `log_event` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogEventParams {
    #[schemars(description = "Brief title of the event")]
    pub title: String,

    #[schemars(description = "Detailed description of what happened")]
    pub description: Option<String>,

    #[schemars(
        description = "Event category, e.g. career, travel, health, personal, learning, social, milestone. Defaults to the configured default category."
    )]
    pub category: Option<String>,

    #[schemars(
        description = "When the event occurred, as an ISO timestamp (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS). Defaults to now."
    )]
    pub timestamp: Option<String>,

    #[schemars(description = "Optional tags for the event")]
    pub tags: Option<Vec<String>>,
}
