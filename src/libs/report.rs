//! Monthly report generation.
//!
//! Walks every calendar day of a month through the occurrence resolver and
//! aggregates completion statistics, so the report can never disagree with
//! the day and month views.

use crate::libs::error::TrackerError;
use crate::libs::occurrence::Occurrence;
use crate::libs::task::{Recurrence, Task};
use crate::libs::tracker::Tracker;
use chrono::{Datelike, Local, NaiveDate};

/// Resolver output for a single calendar day of the report month.
#[derive(Debug, Clone)]
pub struct DayStat {
    pub date: NaiveDate,
    pub total: usize,
    pub completed: usize,
    pub occurrences: Vec<Occurrence>,
}

impl DayStat {
    pub fn percentage(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

/// Aggregated month of resolver output.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    /// One entry per calendar day, including days without tasks.
    pub days: Vec<DayStat>,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Recurring task roster, listed at the end of the text report.
    pub recurring: Vec<Task>,
}

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Number of days in a calendar month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(0)
}

/// Parses a `YYYY-MM` month designator.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    // Probe the first day to reject things like 2024-13.
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

/// Builds the month report by resolving each day of the month.
pub fn month_report(tracker: &mut Tracker, year: i32, month: u32) -> Result<MonthReport, TrackerError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TrackerError::Validation(format!("invalid month {}-{:02}", year, month)))?;

    let mut days = Vec::new();
    let mut total_tasks = 0;
    let mut completed_tasks = 0;

    for day in 1..=days_in_month(year, month) {
        // Every day of a valid month exists; fall back to the first defensively.
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(first);
        let occurrences = tracker.tasks_for_date(date)?;
        let completed = occurrences.iter().filter(|o| o.completed).count();

        total_tasks += occurrences.len();
        completed_tasks += completed;
        days.push(DayStat {
            date,
            total: occurrences.len(),
            completed,
            occurrences,
        });
    }

    let recurring = tracker.list_tasks()?.into_iter().filter(|t| t.is_recurring()).collect();

    Ok(MonthReport {
        year,
        month,
        days,
        total_tasks,
        completed_tasks,
        recurring,
    })
}

impl MonthReport {
    pub fn pending_tasks(&self) -> usize {
        self.total_tasks - self.completed_tasks
    }

    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed_tasks, self.total_tasks)
    }

    /// Days that have at least one occurrence.
    pub fn active_days(&self) -> impl Iterator<Item = &DayStat> {
        self.days.iter().filter(|d| d.total > 0)
    }

    /// Month title, e.g. "June 2024".
    pub fn month_name(&self) -> String {
        self.days.first().map(|d| d.date.format("%B %Y").to_string()).unwrap_or_default()
    }

    /// Renders the plain-text monthly report: summary statistics, per-day
    /// breakdown with task type tags and status marks, and the recurring
    /// task roster.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rule_heavy = "═══════════════════════════════════════════";
        let rule_light = "─────────────────────────────────────────";

        out.push_str("📊 DAYTRACK - MONTHLY REPORT\n");
        out.push_str(rule_heavy);
        out.push('\n');
        out.push_str(&format!("Month: {}\n", self.month_name()));
        out.push_str(&format!("Generated: {}\n", Local::now().format("%A, %B %-d, %Y")));
        out.push_str(rule_heavy);
        out.push_str("\n\n");

        out.push_str("📈 SUMMARY STATISTICS\n");
        out.push_str(rule_light);
        out.push('\n');
        out.push_str(&format!("Total Tasks: {}\n", self.total_tasks));
        out.push_str(&format!("Completed Tasks: {}\n", self.completed_tasks));
        out.push_str(&format!("Pending Tasks: {}\n", self.pending_tasks()));
        out.push_str(&format!("Overall Completion Rate: {}%\n", self.completion_rate()));
        out.push_str(&format!("Active Days: {} days\n\n", self.active_days().count()));

        out.push_str("📅 DAILY BREAKDOWN\n");
        out.push_str(rule_light);
        out.push_str("\n\n");

        for stat in self.active_days() {
            out.push_str(&format!("{} {} - {}\n", stat.date.format("%a"), stat.date.day(), stat.date));
            out.push_str(&format!("  Progress: {}/{} tasks ({}%)\n", stat.completed, stat.total, stat.percentage()));
            out.push_str("  Tasks:\n");

            for occurrence in &stat.occurrences {
                let status = if occurrence.completed { '✓' } else { '○' };
                let tag = match occurrence.task.recurrence {
                    Recurrence::Daily => "[Daily]",
                    Recurrence::Weekly => "[Weekly]",
                    Recurrence::Once => "[Once]",
                };
                out.push_str(&format!("    {} {} {}\n", status, tag, occurrence.task.title));
                if let Some(notes) = &occurrence.task.notes {
                    out.push_str(&format!("       Notes: {}\n", notes));
                }
            }
            out.push('\n');
        }

        if !self.recurring.is_empty() {
            out.push_str("🔄 RECURRING TASKS\n");
            out.push_str(rule_light);
            out.push('\n');
            for task in &self.recurring {
                let kind = match task.recurrence {
                    Recurrence::Daily => "Daily".to_string(),
                    _ => format!("Weekly ({})", crate::libs::task::join_recur_days(&task.recur_days)),
                };
                out.push_str(&format!("• {} - {}\n", task.title, kind));
                if let Some(notes) = &task.notes {
                    out.push_str(&format!("  Notes: {}\n", notes));
                }
            }
            out.push('\n');
        }

        out.push_str(rule_heavy);
        out.push('\n');
        out.push_str("Generated by Daytrack\n");
        out.push_str("Keep up the great work! 🎯\n");

        out
    }
}
