//! Monthly data export in text, CSV and JSON formats.
//!
//! The exporter consumes the same `MonthReport` the terminal views use, so
//! exported numbers always match what the month overview shows.

use crate::libs::messages::Message;
use crate::libs::report::MonthReport;
use crate::libs::task::Recurrence;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// The plain-text monthly report.
    Text,
    /// One row per task occurrence, for spreadsheets.
    Csv,
    /// Structured report data, pretty-printed.
    Json,
}

#[derive(Debug, Serialize)]
struct ExportOccurrence {
    date: String,
    task_id: i64,
    title: String,
    recurrence: &'static str,
    completed: bool,
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExportMonth {
    month: String,
    total_tasks: usize,
    completed_tasks: usize,
    pending_tasks: usize,
    completion_rate: u32,
    occurrences: Vec<ExportOccurrence>,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file name
    /// is generated next to the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("daytrack_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes the month report in the configured format.
    pub fn export(&self, report: &MonthReport) -> Result<()> {
        match self.format {
            ExportFormat::Text => self.export_text(report)?,
            ExportFormat::Csv => self.export_csv(report)?,
            ExportFormat::Json => self.export_json(report)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_text(&self, report: &MonthReport) -> Result<()> {
        File::create(&self.output_path)?.write_all(report.render_text().as_bytes())?;
        Ok(())
    }

    fn export_csv(&self, report: &MonthReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "Task ID", "Title", "Type", "Completed", "Notes"])?;

        for row in flatten(report).occurrences {
            wtr.write_record([
                row.date,
                row.task_id.to_string(),
                row.title,
                row.recurrence.to_string(),
                row.completed.to_string(),
                row.notes.unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, report: &MonthReport) -> Result<()> {
        let json = serde_json::to_string_pretty(&flatten(report))?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn flatten(report: &MonthReport) -> ExportMonth {
    let occurrences = report
        .active_days()
        .flat_map(|stat| {
            stat.occurrences.iter().map(|occurrence| ExportOccurrence {
                date: stat.date.to_string(),
                task_id: occurrence.task.id,
                title: occurrence.task.title.clone(),
                recurrence: match occurrence.task.recurrence {
                    Recurrence::Once => "once",
                    Recurrence::Daily => "daily",
                    Recurrence::Weekly => "weekly",
                },
                completed: occurrence.completed,
                notes: occurrence.task.notes.clone(),
            })
        })
        .collect();

    ExportMonth {
        month: report.month_name(),
        total_tasks: report.total_tasks,
        completed_tasks: report.completed_tasks,
        pending_tasks: report.pending_tasks(),
        completion_rate: report.completion_rate(),
        occurrences,
    }
}
