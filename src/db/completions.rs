//! SQLite implementation of the completion ledger.
//!
//! Entries exist only for completed (task, date) pairs: marking a pair not
//! completed deletes its row, so a missing row and an explicit false read
//! the same and the table stays sparse.

use super::db::Db;
use crate::libs::error::TrackerError;
use crate::libs::occurrence::CompletionSet;
use crate::libs::storage::CompletionStore;
use crate::libs::task::TaskId;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

const SELECT_ENTRY: &str = "SELECT completed FROM completions WHERE task_id = ?1 AND date = ?2";
const UPSERT_ENTRY: &str = "INSERT INTO completions (task_id, date, completed) VALUES (?1, ?2, TRUE)
    ON CONFLICT(task_id, date) DO UPDATE SET completed = TRUE";
const DELETE_ENTRY: &str = "DELETE FROM completions WHERE task_id = ?1 AND date = ?2";
const DELETE_FOR_TASK: &str = "DELETE FROM completions WHERE task_id = ?1";
const SELECT_ALL: &str = "SELECT task_id, date, completed FROM completions";

pub struct Completions {
    pub conn: Connection,
}

impl Completions {
    pub fn new() -> Result<Completions, TrackerError> {
        let db = Db::new()?;
        Ok(Completions { conn: db.conn })
    }
}

impl CompletionStore for Completions {
    fn get(&mut self, task_id: TaskId, date: NaiveDate) -> Result<bool, TrackerError> {
        let completed: Option<bool> = self
            .conn
            .query_row(SELECT_ENTRY, params![task_id, date], |row| row.get(0))
            .optional()?;
        Ok(completed.unwrap_or(false))
    }

    fn set(&mut self, task_id: TaskId, date: NaiveDate, completed: bool) -> Result<(), TrackerError> {
        if completed {
            self.conn.execute(UPSERT_ENTRY, params![task_id, date])?;
        } else {
            self.conn.execute(DELETE_ENTRY, params![task_id, date])?;
        }
        Ok(())
    }

    fn delete_for_task(&mut self, task_id: TaskId) -> Result<(), TrackerError> {
        self.conn.execute(DELETE_FOR_TASK, params![task_id])?;
        Ok(())
    }

    fn load_all(&mut self) -> Result<CompletionSet, TrackerError> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let entry_iter = stmt.query_map([], |row| Ok((row.get::<_, TaskId>(0)?, row.get::<_, NaiveDate>(1)?, row.get::<_, bool>(2)?)))?;

        let mut set = CompletionSet::new();
        for entry in entry_iter {
            let (task_id, date, completed) = entry?;
            set.insert(task_id, date, completed);
        }
        Ok(set)
    }
}
