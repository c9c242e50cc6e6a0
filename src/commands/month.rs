use super::month_or_current;
use crate::libs::messages::Message;
use crate::libs::report::month_report;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Month to show (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(args: MonthArgs) -> Result<()> {
    let month_arg = args.month.clone();
    let Some((year, month)) = month_or_current(args.month) else {
        msg_bail_anyhow!(Message::InvalidMonth(month_arg.unwrap_or_default()));
    };

    let mut tracker = Tracker::open()?;
    let report = month_report(&mut tracker, year, month)?;

    msg_print!(Message::MonthHeader(report.month_name()), true);
    View::month(&report);

    Ok(())
}
