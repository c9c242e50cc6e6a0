pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod month;
pub mod report;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks for a date")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion for a date")]
    Done(done::DoneArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show monthly overview")]
    Month(month::MonthArgs),
    #[command(about = "Prepare a monthly report")]
    Report(report::ReportArgs),
    #[command(about = "Export monthly data")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Month(args) => month::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
        .map_err(Into::into)
    }
}

/// Date argument fallback: today, as a calendar date.
pub(crate) fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Month argument fallback: the current year and month.
pub(crate) fn month_or_current(month: Option<String>) -> Option<(i32, u32)> {
    match month {
        Some(value) => crate::libs::report::parse_month(&value),
        None => {
            let today = Local::now().date_naive();
            Some((today.year(), today.month()))
        }
    }
}
