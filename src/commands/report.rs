use super::month_or_current;
use crate::libs::messages::Message;
use crate::libs::report::month_report;
use crate::libs::tracker::Tracker;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let month_arg = args.month.clone();
    let Some((year, month)) = month_or_current(args.month) else {
        msg_bail_anyhow!(Message::InvalidMonth(month_arg.unwrap_or_default()));
    };

    let mut tracker = Tracker::open()?;
    let report = month_report(&mut tracker, year, month)?;
    let text = report.render_text();

    match args.output {
        Some(path) => {
            fs::write(&path, text)?;
            msg_success!(Message::ReportSaved(path.display().to_string()));
        }
        None => println!("{}", text),
    }

    Ok(())
}
