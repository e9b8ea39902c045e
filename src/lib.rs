//! Personal timeline logger: a SQLite event store with an MCP tool surface.
//!
//! lifelog records life events and reminders spoken to a conversational
//! agent and retrieves them by date range, category, tag, or free text. The
//! agent itself (prompting, model choice, turn handling) lives outside this
//! crate; lifelog is the data/query core it calls into.
//!
//! # Architecture
//!
//! - **Storage**: one SQLite table of events with indexes on `category` and
//!   `timestamp`; tags ride along as a JSON array column
//! - **Query engine**: typed filter predicates AND-combined into one ordered
//!   retrieval (newest first), with match-any tag filtering applied after the
//!   storage stage
//! - **Reminders**: a naming convention, not a table: events in the reserved
//!   `"reminder"` category whose timestamp encodes the due date at 09:00
//! - **Transport**: MCP over stdio (primary) or Streamable HTTP, plus a
//!   local CLI
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite initialization, schema, and migrations
//! - [`error`]: The `Validation` / `Storage` error taxonomy
//! - [`timeline`]: Core engine: types, store, query, stats, and reminders

pub mod config;
pub mod db;
pub mod error;
pub mod timeline;
