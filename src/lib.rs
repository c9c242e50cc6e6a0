//! # Daytrack - Daily Task Tracker
//!
//! A command-line utility for tracking one-time and recurring tasks,
//! marking per-day completion, and generating monthly progress reports.
//!
//! ## Features
//!
//! - **Task Management**: One-time, daily, and weekly recurring tasks
//! - **Per-Day Completion**: Recurring tasks are checked off per calendar date
//! - **Occurrence Resolution**: One pure projection answers "what applies today"
//! - **Monthly Reports**: Summary statistics and per-day breakdowns
//! - **Data Export**: Text, CSV, and JSON output
//! - **Pluggable Storage**: SQLite database or a plain JSON document
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daytrack::commands::Cli;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
