//! Display implementation converting structured messages into terminal text.
//!
//! All user-facing message text lives here, keeping wording in one place
//! and the call sites type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskMarkedDone(title, date) => format!("'{}' marked done for {}", title, date),
            Message::TaskMarkedPending(title, date) => format!("'{}' marked pending for {}", title, date),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === VIEW MESSAGES ===
            Message::TasksHeader(date) => format!("Tasks for {}", date),
            Message::NoTasksForDate(date) => format!("No tasks for {}", date),
            Message::AllTasksHeader => "All tasks".to_string(),
            Message::NoTasksDefined => "No tasks defined yet. Add one with 'daytrack add'".to_string(),
            Message::MonthHeader(month) => format!("Overview for {}", month),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigIntro => "Configuring daytrack".to_string(),
            Message::PromptStorageBackend => "Storage backend".to_string(),
            Message::ConfigSaved => "Configuration saved".to_string(),

            // === REPORT & EXPORT MESSAGES ===
            Message::ReportSaved(path) => format!("Report written to {}", path),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::InvalidMonth(value) => format!("Invalid month '{}', expected YYYY-MM", value),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "Database is up to date".to_string(),

            // === GENERIC MESSAGES ===
            Message::Custom(text) => text.clone(),
        };
        write!(f, "{}", text)
    }
}
