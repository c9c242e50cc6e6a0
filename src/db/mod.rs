pub mod completions;
pub mod db;
pub mod json;
pub mod migrations;
pub mod tasks;

use crate::libs::config::{Config, StorageBackend};
use crate::libs::error::TrackerError;
use crate::libs::storage::{CompletionStore, TaskStore};

/// Opens the task and completion stores for the configured backend.
///
/// The tracker core only ever sees the trait objects returned here.
pub fn open_stores(config: &Config) -> Result<(Box<dyn TaskStore>, Box<dyn CompletionStore>), TrackerError> {
    match config.storage {
        StorageBackend::Sqlite => Ok((Box::new(tasks::Tasks::new()?), Box::new(completions::Completions::new()?))),
        StorageBackend::Json => Ok((Box::new(json::JsonTasks::new()?), Box::new(json::JsonCompletions::new()?))),
    }
}
