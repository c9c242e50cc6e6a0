use crate::libs::messages::Message;
use crate::libs::task::{Recurrence, TaskId, TaskPatch};
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id to edit
    #[arg(required = true)]
    id: TaskId,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New notes; an empty string clears them
    #[arg(short, long)]
    notes: Option<String>,

    /// Turn into a one-time task on this date (YYYY-MM-DD)
    #[arg(short, long, conflicts_with_all = ["daily", "days"])]
    date: Option<NaiveDate>,

    /// Turn into a daily task
    #[arg(long, conflicts_with = "days")]
    daily: bool,

    /// Turn into a weekly task on these weekdays, 0=Sunday..6=Saturday
    #[arg(long, value_delimiter = ',')]
    days: Option<Vec<u8>>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut patch = TaskPatch {
        title: args.title,
        notes: args.notes,
        ..Default::default()
    };

    // A schedule flag rewrites the whole recurrence triple so the stored
    // record keeps a consistent combination.
    if args.daily {
        patch.recurrence = Some(Recurrence::Daily);
        patch.recur_days = Some(Vec::new());
        patch.date = Some(None);
    } else if let Some(days) = args.days {
        patch.recurrence = Some(Recurrence::Weekly);
        patch.recur_days = Some(days);
        patch.date = Some(None);
    } else if let Some(date) = args.date {
        patch.recurrence = Some(Recurrence::Once);
        patch.recur_days = Some(Vec::new());
        patch.date = Some(Some(date));
    }

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let task = Tracker::open()?.update_task(args.id, patch)?;
    msg_success!(Message::TaskUpdated(task.title));

    Ok(())
}
