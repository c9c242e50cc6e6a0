use super::date_or_today;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Date to resolve (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Show every task definition instead of one date's occurrences
    #[arg(long)]
    all: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;

    if args.all {
        let tasks = tracker.list_tasks()?;
        if tasks.is_empty() {
            msg_info!(Message::NoTasksDefined);
            return Ok(());
        }
        msg_print!(Message::AllTasksHeader, true);
        View::tasks(&tasks);
        return Ok(());
    }

    let date = date_or_today(args.date);
    let occurrences = tracker.tasks_for_date(date)?;
    if occurrences.is_empty() {
        msg_info!(Message::NoTasksForDate(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(date.to_string()), true);
    View::occurrences(&occurrences);

    Ok(())
}
