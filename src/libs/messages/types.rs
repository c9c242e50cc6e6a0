#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskMarkedDone(String, String),    // title, date
    TaskMarkedPending(String, String), // title, date
    NoChangesDetected,
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === VIEW MESSAGES ===
    TasksHeader(String), // date
    NoTasksForDate(String),
    AllTasksHeader,
    NoTasksDefined,
    MonthHeader(String), // "June 2024"

    // === CONFIGURATION MESSAGES ===
    ConfigIntro,
    PromptStorageBackend,
    ConfigSaved,

    // === REPORT & EXPORT MESSAGES ===
    ReportSaved(String),     // path
    ExportCompleted(String), // path
    InvalidMonth(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === GENERIC MESSAGES ===
    Custom(String),
}
