//! Application state: the task repository and completion ledger behind one
//! explicit object.
//!
//! `Tracker` owns the two storage collaborators and is passed by reference
//! to every command; there is no process-global store. Queries go through
//! the pure occurrence resolver, so they are recomputed per call and can
//! never drift from a stale cache.

use crate::libs::config::Config;
use crate::libs::error::TrackerError;
use crate::libs::occurrence::{self, Occurrence};
use crate::libs::storage::{CompletionStore, TaskStore};
use crate::libs::task::{NewTask, Recurrence, Task, TaskId, TaskPatch};
use chrono::{Local, NaiveDate};
use tracing::debug;

pub struct Tracker {
    tasks: Box<dyn TaskStore>,
    completions: Box<dyn CompletionStore>,
}

/// Weekday indices are 0=Sunday..6=Saturday; anything else never matches a
/// date and must not reach storage.
fn validate_recur_days(days: &[u8]) -> Result<(), TrackerError> {
    match days.iter().find(|d| **d > 6) {
        Some(day) => Err(TrackerError::Validation(format!("weekday index {} out of range 0..=6", day))),
        None => Ok(()),
    }
}

impl Tracker {
    /// Opens the tracker against the backend selected in the configuration.
    pub fn open() -> Result<Self, TrackerError> {
        let config = Config::read().map_err(|e| TrackerError::Storage(e.to_string()))?;
        let (tasks, completions) = crate::db::open_stores(&config)?;
        Ok(Self::with_stores(tasks, completions))
    }

    /// Builds a tracker from explicit storage collaborators.
    pub fn with_stores(tasks: Box<dyn TaskStore>, completions: Box<dyn CompletionStore>) -> Self {
        Tracker { tasks, completions }
    }

    /// Creates a task, assigning identity and timestamps.
    ///
    /// The title must be non-empty after trimming. Recurrence defaults to
    /// `Once`; a recurring input discards any supplied date so the stored
    /// record keeps the "recurring xor dated" invariant, and a one-time
    /// input without a date is scheduled for today. Weekly day indices must
    /// be in 0..=6.
    pub fn create_task(&mut self, input: NewTask) -> Result<Task, TrackerError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(TrackerError::Validation("task title must not be empty".to_string()));
        }

        let recurrence = input.recurrence.unwrap_or(Recurrence::Once);
        if recurrence == Recurrence::Weekly {
            validate_recur_days(&input.recur_days)?;
        }
        let now = Local::now().naive_local();
        let mut task = Task {
            id: 0,
            title,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
            recurrence,
            recur_days: if recurrence == Recurrence::Weekly { input.recur_days } else { Vec::new() },
            date: if recurrence == Recurrence::Once {
                input.date.or_else(|| Some(Local::now().date_naive()))
            } else {
                None
            },
            completed: false,
            created_at: now,
            updated_at: now,
        };
        task.id = self.tasks.insert(&task)?;
        debug!(id = task.id, title = %task.title, "task created");
        Ok(task)
    }

    /// Merges `patch` over the stored task and persists the result.
    ///
    /// Fails with `NotFound` when no task has `id`; a patched title is
    /// re-validated and patched weekday indices are range-checked. The
    /// recurrence/date/recur_days combination is otherwise taken as
    /// supplied: the repository does not auto-correct it.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task, TrackerError> {
        let mut task = self.tasks.get_by_id(id)?.ok_or(TrackerError::NotFound(id))?;

        if let Some(title) = patch.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(TrackerError::Validation("task title must not be empty".to_string()));
            }
            task.title = title;
        }
        if let Some(notes) = patch.notes {
            task.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        }
        if let Some(recurrence) = patch.recurrence {
            task.recurrence = recurrence;
        }
        if let Some(days) = patch.recur_days {
            validate_recur_days(&days)?;
            task.recur_days = days;
        }
        if let Some(date) = patch.date {
            task.date = date;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = Local::now().naive_local();

        self.tasks.put(&task)?;
        Ok(task)
    }

    /// Removes a task and cascades its ledger entries.
    ///
    /// A missing task is a silent no-op; the cascade still runs so no
    /// orphaned completion state can linger.
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool, TrackerError> {
        let existed = self.tasks.delete(id)?;
        self.completions.delete_for_task(id)?;
        debug!(id, existed, "task deleted");
        Ok(existed)
    }

    /// All tasks in `created_at` order.
    pub fn list_tasks(&mut self) -> Result<Vec<Task>, TrackerError> {
        self.tasks.get_all()
    }

    pub fn get_task(&mut self, id: TaskId) -> Result<Option<Task>, TrackerError> {
        self.tasks.get_by_id(id)
    }

    /// Ledger lookup; false when no entry exists.
    pub fn completion(&mut self, id: TaskId, date: NaiveDate) -> Result<bool, TrackerError> {
        self.completions.get(id, date)
    }

    pub fn set_completion(&mut self, id: TaskId, date: NaiveDate, completed: bool) -> Result<(), TrackerError> {
        self.completions.set(id, date, completed)
    }

    /// Flips completion for a task on a date and returns the new value.
    ///
    /// The recurring/one-time branch is derived from the stored record, not
    /// from any caller-held occurrence, so an occurrence that went stale
    /// after an edit cannot route the toggle to the wrong store.
    pub fn toggle_completion(&mut self, id: TaskId, date: NaiveDate) -> Result<bool, TrackerError> {
        let task = self.tasks.get_by_id(id)?.ok_or(TrackerError::NotFound(id))?;

        if task.is_recurring() {
            let next = !self.completions.get(id, date)?;
            self.completions.set(id, date, next)?;
            Ok(next)
        } else {
            let next = !task.completed;
            self.update_task(
                id,
                TaskPatch {
                    completed: Some(next),
                    ..Default::default()
                },
            )?;
            Ok(next)
        }
    }

    /// Occurrences active on `date`, in repository order.
    pub fn tasks_for_date(&mut self, date: NaiveDate) -> Result<Vec<Occurrence>, TrackerError> {
        let tasks = self.tasks.get_all()?;
        let completions = self.completions.load_all()?;
        Ok(occurrence::resolve(date, &tasks, &completions))
    }
}
