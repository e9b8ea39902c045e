//! MCP `query_events` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `query_events` MCP tool.
///
/// All filters are optional and AND-combined, except `tags` which matches an
/// event carrying any of the requested tags.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct QueryEventsParams {
    #[schemars(description = "Text to search for in event titles and descriptions")]
    pub search_text: Option<String>,

    #[schemars(description = "Filter by category (case-insensitive), e.g. 'travel'")]
    pub category: Option<String>,

    #[schemars(description = "Start of date range, inclusive (ISO format)")]
    pub start_date: Option<String>,

    #[schemars(description = "End of date range, inclusive (ISO format)")]
    pub end_date: Option<String>,

    #[schemars(
        description = "Filter by tags; an event matches when it carries any of these. Combined with 'limit', fewer than 'limit' rows may come back."
    )]
    pub tags: Option<Vec<String>>,

    #[schemars(description = "Maximum number of results. Defaults to 50.")]
    pub limit: Option<usize>,
}
