//! SQLite implementation of the task store.

use super::db::Db;
use crate::libs::error::TrackerError;
use crate::libs::storage::TaskStore;
use crate::libs::task::{join_recur_days, parse_recur_days, Recurrence, Task, TaskId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_TASKS: &str = "SELECT id, title, notes, recurrence, recur_days, date, completed, created_at, updated_at FROM tasks";
const INSERT_TASK: &str = "INSERT INTO tasks (title, notes, recurrence, recur_days, date, completed, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, notes = ?3, recurrence = ?4, recur_days = ?5, date = ?6,
    completed = ?7, created_at = ?8, updated_at = ?9 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks, TrackerError> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            notes: row.get(2)?,
            recurrence: Recurrence::parse(&row.get::<_, String>(3)?),
            recur_days: parse_recur_days(&row.get::<_, String>(4)?),
            date: row.get(5)?,
            completed: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}

impl TaskStore for Tasks {
    fn get_all(&mut self) -> Result<Vec<Task>, TrackerError> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY created_at, id", SELECT_TASKS))?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn get_by_id(&mut self, id: TaskId) -> Result<Option<Task>, TrackerError> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::map_row)
            .optional()?;
        Ok(task)
    }

    fn insert(&mut self, task: &Task) -> Result<TaskId, TrackerError> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.notes,
                task.recurrence.as_str(),
                join_recur_days(&task.recur_days),
                task.date,
                task.completed,
                task.created_at,
                task.updated_at
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn put(&mut self, task: &Task) -> Result<(), TrackerError> {
        self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.notes,
                task.recurrence.as_str(),
                join_recur_days(&task.recur_days),
                task.date,
                task.completed,
                task.created_at,
                task.updated_at
            ],
        )?;
        Ok(())
    }

    fn delete(&mut self, id: TaskId) -> Result<bool, TrackerError> {
        let deleted = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(deleted > 0)
    }
}
