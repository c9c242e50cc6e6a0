//! Configuration management for the daytrack application.
//!
//! The configuration selects the storage backend and is stored as JSON in
//! the platform-specific application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\daytrack\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/daytrack/config.json`
//! - **Linux**: `~/.local/share/lacodda/daytrack/config.json`
//!
//! A missing file is not an error; it yields the default configuration so
//! the application runs without any setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Storage backend for tasks and completions, chosen at startup.
///
/// Both backends implement the same storage traits; the tracker core never
/// depends on a specific one.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Embedded SQLite database (`daytrack.db`).
    #[default]
    Sqlite,
    /// Single JSON document (`daytrack.json`).
    Json,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Json => "json",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Backend used for both the task repository and the completion ledger.
    #[serde(default)]
    pub storage: StorageBackend,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup: pick the storage backend, starting from the
    /// currently configured value.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigIntro);
        let backends = [StorageBackend::Sqlite, StorageBackend::Json];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&backends.iter().map(|b| b.as_str()).collect::<Vec<_>>())
            .default(backends.iter().position(|b| *b == config.storage).unwrap_or(0))
            .interact()?;

        config.storage = backends[selected];
        Ok(config)
    }
}
