//! JSON file storage backend.
//!
//! Keeps the whole data set in a single pretty-printed document
//! (`daytrack.json`): an id counter, the task list and the completion
//! entries. Every operation reads the file, applies the change and writes
//! it back, so a failed write leaves the previous document intact on disk.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::TrackerError;
use crate::libs::occurrence::CompletionSet;
use crate::libs::storage::{CompletionStore, TaskStore};
use crate::libs::task::{Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const JSON_FILE_NAME: &str = "daytrack.json";

#[derive(Debug, Serialize, Deserialize)]
struct CompletionEntry {
    task_id: TaskId,
    date: NaiveDate,
    completed: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    /// Next id to hand out; ids of deleted tasks are never reused.
    next_id: TaskId,
    tasks: Vec<Task>,
    completions: Vec<CompletionEntry>,
}

fn document_path() -> Result<PathBuf, TrackerError> {
    DataStorage::new()
        .get_path(JSON_FILE_NAME)
        .map_err(|e| TrackerError::Storage(e.to_string()))
}

fn load(path: &PathBuf) -> Result<Document, TrackerError> {
    if !path.exists() {
        return Ok(Document::default());
    }
    let contents = fs::read_to_string(path)?;
    // A corrupt document is an error, not an empty store; silently starting
    // over would discard the user's data.
    Ok(serde_json::from_str(&contents)?)
}

fn save(path: &PathBuf, doc: &Document) -> Result<(), TrackerError> {
    let contents = serde_json::to_string_pretty(doc)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Task store over the JSON document.
pub struct JsonTasks {
    path: PathBuf,
}

impl JsonTasks {
    pub fn new() -> Result<Self, TrackerError> {
        Ok(JsonTasks { path: document_path()? })
    }
}

impl TaskStore for JsonTasks {
    fn get_all(&mut self) -> Result<Vec<Task>, TrackerError> {
        let mut tasks = load(&self.path)?.tasks;
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }

    fn get_by_id(&mut self, id: TaskId) -> Result<Option<Task>, TrackerError> {
        Ok(load(&self.path)?.tasks.into_iter().find(|t| t.id == id))
    }

    fn insert(&mut self, task: &Task) -> Result<TaskId, TrackerError> {
        let mut doc = load(&self.path)?;
        if doc.next_id < 1 {
            doc.next_id = 1;
        }
        let id = doc.next_id;
        doc.next_id += 1;

        let mut stored = task.clone();
        stored.id = id;
        doc.tasks.push(stored);
        save(&self.path, &doc)?;
        Ok(id)
    }

    fn put(&mut self, task: &Task) -> Result<(), TrackerError> {
        let mut doc = load(&self.path)?;
        if let Some(stored) = doc.tasks.iter_mut().find(|t| t.id == task.id) {
            *stored = task.clone();
        }
        save(&self.path, &doc)
    }

    fn delete(&mut self, id: TaskId) -> Result<bool, TrackerError> {
        let mut doc = load(&self.path)?;
        let before = doc.tasks.len();
        doc.tasks.retain(|t| t.id != id);
        let existed = doc.tasks.len() < before;
        save(&self.path, &doc)?;
        Ok(existed)
    }
}

/// Completion ledger over the same JSON document.
///
/// Follows the delete-on-false policy of the SQLite backend: un-completing
/// removes the entry instead of storing an explicit false.
pub struct JsonCompletions {
    path: PathBuf,
}

impl JsonCompletions {
    pub fn new() -> Result<Self, TrackerError> {
        Ok(JsonCompletions { path: document_path()? })
    }
}

impl CompletionStore for JsonCompletions {
    fn get(&mut self, task_id: TaskId, date: NaiveDate) -> Result<bool, TrackerError> {
        let doc = load(&self.path)?;
        Ok(doc
            .completions
            .iter()
            .find(|e| e.task_id == task_id && e.date == date)
            .map(|e| e.completed)
            .unwrap_or(false))
    }

    fn set(&mut self, task_id: TaskId, date: NaiveDate, completed: bool) -> Result<(), TrackerError> {
        let mut doc = load(&self.path)?;
        doc.completions.retain(|e| !(e.task_id == task_id && e.date == date));
        if completed {
            doc.completions.push(CompletionEntry { task_id, date, completed });
        }
        save(&self.path, &doc)
    }

    fn delete_for_task(&mut self, task_id: TaskId) -> Result<(), TrackerError> {
        let mut doc = load(&self.path)?;
        doc.completions.retain(|e| e.task_id != task_id);
        save(&self.path, &doc)
    }

    fn load_all(&mut self) -> Result<CompletionSet, TrackerError> {
        let doc = load(&self.path)?;
        let mut set = CompletionSet::new();
        for entry in &doc.completions {
            set.insert(entry.task_id, entry.date, entry.completed);
        }
        Ok(set)
    }
}
