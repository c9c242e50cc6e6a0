use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TrackerError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "daytrack.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and applies any pending migrations.
    pub fn new() -> Result<Db, TrackerError> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| TrackerError::Storage(e.to_string()))?;
        let mut conn = Connection::open(db_file_path)?;
        migrations::init_with_migrations(&mut conn).map_err(|e| TrackerError::Storage(e.to_string()))?;

        Ok(Db { conn })
    }
}
