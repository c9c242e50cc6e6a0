//! Occurrence resolver: projects stored tasks onto a calendar date.
//!
//! `resolve` is the single source of truth for "which tasks apply to date D
//! and what is each one's completion state on D". Every presentation surface
//! (day view, month overview, report, export) goes through it; the function
//! is pure, holds no cache, and is recomputed after every mutation.

use crate::libs::task::{Recurrence, Task, TaskId};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// In-memory snapshot of the completion ledger.
///
/// Absent entries read as `false`, matching the sparse storage: backends may
/// drop entries on un-complete rather than storing an explicit `false`.
#[derive(Debug, Clone, Default)]
pub struct CompletionSet {
    entries: HashMap<(TaskId, NaiveDate), bool>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task_id: TaskId, date: NaiveDate, completed: bool) {
        self.entries.insert((task_id, date), completed);
    }

    pub fn get(&self, task_id: TaskId, date: NaiveDate) -> bool {
        self.entries.get(&(task_id, date)).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A task projected onto a specific date. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub task: Task,
    /// Completion state for the resolved date: ledger lookup for recurring
    /// tasks, the stored flag for one-time tasks.
    pub completed: bool,
}

/// Weekday index of a calendar date, 0=Sunday..6=Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Returns true if `task` is active on `date`.
///
/// A weekly task with an empty day set matches no date; a one-time task
/// without a date matches no date either.
pub fn matches_date(task: &Task, date: NaiveDate, day_of_week: u8) -> bool {
    match task.recurrence {
        Recurrence::Daily => true,
        Recurrence::Weekly => task.recur_days.contains(&day_of_week),
        Recurrence::Once => task.date == Some(date),
    }
}

/// Projects `tasks` onto `date`, annotating each included task with its
/// completion state for that date.
///
/// Output order is input order, i.e. the repository's `created_at` ordering.
/// O(tasks) per call.
pub fn resolve(date: NaiveDate, tasks: &[Task], completions: &CompletionSet) -> Vec<Occurrence> {
    let day_of_week = weekday_index(date);

    tasks
        .iter()
        .filter(|task| matches_date(task, date, day_of_week))
        .map(|task| Occurrence {
            completed: if task.is_recurring() {
                completions.get(task.id, date)
            } else {
                task.completed
            },
            task: task.clone(),
        })
        .collect()
}
