//! Error taxonomy for the tracker core.
//!
//! Commands work with `anyhow::Result` and propagate these with `?`;
//! the core itself never swallows an error or applies a partial mutation.

use crate::libs::task::TaskId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Task input rejected before any mutation took place.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation referenced a task id that does not exist.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The storage collaborator failed; in-memory state is unchanged.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
