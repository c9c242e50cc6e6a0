use super::date_or_today;
use crate::libs::error::TrackerError;
use crate::libs::messages::Message;
use crate::libs::task::TaskId;
use crate::libs::tracker::Tracker;
use crate::{msg_error, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id to toggle
    #[arg(required = true)]
    id: TaskId,

    /// Date to toggle completion for (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;
    let date = date_or_today(args.date);

    let title = match tracker.get_task(args.id)? {
        Some(task) => task.title,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Err(TrackerError::NotFound(args.id).into());
        }
    };

    let completed = tracker.toggle_completion(args.id, date)?;
    if completed {
        msg_success!(Message::TaskMarkedDone(title, date.to_string()));
    } else {
        msg_success!(Message::TaskMarkedPending(title, date.to_string()));
    }

    Ok(())
}
