//! MCP `upcoming_reminders` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `upcoming_reminders` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpcomingRemindersParams {
    #[schemars(description = "Number of days to look ahead. Defaults to 30.")]
    pub days_ahead: Option<i64>,
}
