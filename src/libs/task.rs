//! Core task model: one-time and recurring task definitions.
//!
//! A task is either scheduled for a single calendar date or recurs daily or
//! on a fixed set of weekdays. For recurring tasks the per-date completion
//! state lives in the completion ledger, never on the task record itself.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier assigned by the storage backend. Never reused.
pub type TaskId = i64;

/// Recurrence pattern of a task.
///
/// `Once` tasks carry a concrete `date`; recurring tasks do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Daily,
    Weekly,
}

impl Recurrence {
    /// Parses the storage representation produced by [`Recurrence::as_str`].
    ///
    /// Unknown values fall back to `Once` so a hand-edited database row
    /// degrades to an inert one-time task instead of failing every query.
    pub fn parse(s: &str) -> Self {
        match s {
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            _ => Recurrence::Once,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Once => "once",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Once => write!(f, "Once"),
            Recurrence::Daily => write!(f, "Daily"),
            Recurrence::Weekly => write!(f, "Weekly"),
        }
    }
}

/// A stored task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub notes: Option<String>,
    pub recurrence: Recurrence,
    /// Weekday indices (0=Sunday..6=Saturday); consulted only when `Weekly`.
    pub recur_days: Vec<u8>,
    /// Scheduled date; set only for one-time tasks.
    pub date: Option<NaiveDate>,
    /// Completion flag; authoritative only for one-time tasks.
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        self.recurrence != Recurrence::Once
    }
}

/// Input for creating a task. Identity and timestamps are assigned on
/// create; a one-time input without a date is scheduled for today.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub notes: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub recur_days: Vec<u8>,
    pub date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn daily(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            recurrence: Some(Recurrence::Daily),
            ..Default::default()
        }
    }

    pub fn weekly(title: &str, days: &[u8]) -> Self {
        NewTask {
            title: title.to_string(),
            recurrence: Some(Recurrence::Weekly),
            recur_days: days.to_vec(),
            ..Default::default()
        }
    }

    pub fn once(title: &str, date: NaiveDate) -> Self {
        NewTask {
            title: title.to_string(),
            date: Some(date),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Partial update merged over a stored task by `Tracker::update_task`.
///
/// `None` fields keep the stored value. The tracker does not reconcile a
/// patched recurrence with `date`/`recur_days`; callers supply a consistent
/// combination.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub recur_days: Option<Vec<u8>>,
    pub date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.notes.is_none()
            && self.recurrence.is_none()
            && self.recur_days.is_none()
            && self.date.is_none()
            && self.completed.is_none()
    }
}

/// Joins weekday indices into the storage form, e.g. `[1, 3]` -> `"1,3"`.
pub fn join_recur_days(days: &[u8]) -> String {
    days.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(",")
}

/// Parses the storage form back into weekday indices, dropping garbage
/// and anything outside 0..=6.
pub fn parse_recur_days(s: &str) -> Vec<u8> {
    s.split(',')
        .filter_map(|part| part.trim().parse::<u8>().ok())
        .filter(|d| *d <= 6)
        .collect()
}
