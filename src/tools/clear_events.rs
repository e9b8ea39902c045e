//! MCP `clear_events` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `clear_events` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClearEventsParams {
    #[schemars(
        description = "Must be true to actually delete every event. Safety gate against accidental wipes."
    )]
    pub confirm: Option<bool>,
}
