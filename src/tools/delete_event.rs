//! MCP `delete_event` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `delete_event` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteEventParams {
    #[schemars(description = "ID of the event to delete")]
    pub id: i64,
}
