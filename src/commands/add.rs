use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Recurrence};
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    /// Optional free-form notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Scheduled date for a one-time task (YYYY-MM-DD)
    #[arg(short, long, conflicts_with_all = ["daily", "days"])]
    date: Option<NaiveDate>,

    /// Repeat every day
    #[arg(long, conflicts_with = "days")]
    daily: bool,

    /// Repeat weekly on these weekdays, 0=Sunday..6=Saturday (e.g. --days 1,3)
    #[arg(long, value_delimiter = ',')]
    days: Option<Vec<u8>>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut input = NewTask::new(&args.title);
    input.notes = args.notes;

    if args.daily {
        input.recurrence = Some(Recurrence::Daily);
    } else if let Some(days) = args.days {
        input.recurrence = Some(Recurrence::Weekly);
        input.recur_days = days;
    } else {
        input.date = args.date;
    }

    let task = Tracker::open()?.create_task(input)?;
    msg_success!(Message::TaskCreated(task.title));

    Ok(())
}
