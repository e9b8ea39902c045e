//! Core timeline engine: entity types and normalization, the SQLite-backed
//! store, the filter/query engine, statistics aggregation, and the
//! reminder-as-event projection.

pub mod query;
pub mod reminders;
pub mod stats;
pub mod store;
pub mod types;
