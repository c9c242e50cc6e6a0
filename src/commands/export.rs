use super::month_or_current;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::report::month_report;
use crate::libs::tracker::Tracker;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Month to export (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Output file path; defaults to a timestamped name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let month_arg = args.month.clone();
    let Some((year, month)) = month_or_current(args.month) else {
        msg_bail_anyhow!(Message::InvalidMonth(month_arg.unwrap_or_default()));
    };

    let mut tracker = Tracker::open()?;
    let report = month_report(&mut tracker, year, month)?;

    Exporter::new(args.format, args.output).export(&report)?;

    Ok(())
}
