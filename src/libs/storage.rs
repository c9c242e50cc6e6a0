//! Storage collaborator traits for tasks and the completion ledger.
//!
//! The tracker core depends only on these traits; the concrete backend
//! (SQLite database or JSON document) is chosen once at startup from the
//! configuration. Both backends persist every mutation before returning,
//! so a storage failure leaves no half-applied state behind.

use crate::libs::error::TrackerError;
use crate::libs::occurrence::CompletionSet;
use crate::libs::task::{Task, TaskId};
use chrono::NaiveDate;

/// Durable store for task definitions.
pub trait TaskStore {
    /// All tasks ordered by `created_at` ascending (id as tie-break).
    fn get_all(&mut self) -> Result<Vec<Task>, TrackerError>;

    fn get_by_id(&mut self, id: TaskId) -> Result<Option<Task>, TrackerError>;

    /// Persists a new task, assigning and returning its id.
    /// The `id` field of `task` is ignored.
    fn insert(&mut self, task: &Task) -> Result<TaskId, TrackerError>;

    /// Overwrites the stored record with the same id.
    fn put(&mut self, task: &Task) -> Result<(), TrackerError>;

    /// Removes a task. Returns false when no such task existed.
    fn delete(&mut self, id: TaskId) -> Result<bool, TrackerError>;
}

/// Durable sparse `(task, date) -> bool` ledger for recurring tasks.
///
/// Absent entries read as not completed. Setting `false` removes the entry,
/// which is equivalent under the default and keeps the store sparse.
pub trait CompletionStore {
    fn get(&mut self, task_id: TaskId, date: NaiveDate) -> Result<bool, TrackerError>;

    fn set(&mut self, task_id: TaskId, date: NaiveDate, completed: bool) -> Result<(), TrackerError>;

    /// Removes every entry for a task (repository delete cascade).
    fn delete_for_task(&mut self, task_id: TaskId) -> Result<(), TrackerError>;

    /// Bulk-loads the ledger into a snapshot for the resolver.
    fn load_all(&mut self) -> Result<CompletionSet, TrackerError>;
}
