//! Database schema migration management.
//!
//! Maintains a versioned registry of schema changes and applies pending ones
//! inside a transaction during database initialization. Applied versions are
//! recorded in a `migrations` table for tracking and auditing.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::info;

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change with its version and transformation function.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: task definitions
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        notes TEXT,
        recurrence TEXT NOT NULL DEFAULT 'once',
        recur_days TEXT NOT NULL DEFAULT '',
        date DATE,
        completed BOOLEAN NOT NULL ON CONFLICT REPLACE DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL,
        updated_at TIMESTAMP NOT NULL
    )",
                [],
            )?;

            // Index tasks by creation time for the stable list ordering
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at)", [])?;
            Ok(())
        });

        // Version 2: sparse per-date completion ledger for recurring tasks
        self.add_migration(2, "create_completions_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS completions (
        task_id INTEGER NOT NULL,
        date DATE NOT NULL,
        completed BOOLEAN NOT NULL ON CONFLICT REPLACE DEFAULT TRUE,
        PRIMARY KEY (task_id, date)
    )",
                [],
            )?;

            // Index for the delete-by-task cascade
            tx.execute("CREATE INDEX IF NOT EXISTS idx_completions_task_id ON completions(task_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations, newest schema last.
    ///
    /// Each run happens in a single transaction; a failing migration rolls
    /// everything back and surfaces the error.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::AllMigrationsCompleted);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        let tx = conn.transaction()?;

        for migration in pending {
            info!(version = migration.version, name = migration.name, "applying migration");

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes a connection with all pending migrations applied.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version; 0 when no migrations have been applied yet.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}
