//! MCP `recent_events` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `recent_events` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RecentEventsParams {
    #[schemars(description = "Number of recent events to retrieve. Defaults to 10.")]
    pub limit: Option<usize>,
}
