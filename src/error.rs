//! Error taxonomy for the timeline core.
//!
//! [`TimelineError::Validation`] is raised at the entity boundary before any
//! I/O; [`TimelineError::Storage`] wraps SQLite failures and is never
//! swallowed. Expected non-exceptional outcomes (deleting a missing id,
//! reading the date range of an empty table) are reported through `bool` /
//! `Option` return values, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    /// A required field was missing or malformed. Raised before any I/O.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Underlying SQLite failure (I/O, permission, corruption).
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The serialized tags column could not be decoded as a JSON array.
    #[error("corrupt tags column: {0}")]
    TagDecode(#[from] serde_json::Error),

    /// Filesystem failure while preparing the database location.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
