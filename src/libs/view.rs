use super::occurrence::Occurrence;
use super::report::MonthReport;
use super::task::{Recurrence, Task};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the occurrences resolved for a single date.
    pub fn occurrences(occurrences: &[Occurrence]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "STATUS", "TYPE", "TITLE", "NOTES"]);
        for occurrence in occurrences {
            table.add_row(row![
                occurrence.task.id,
                if occurrence.completed { "✓" } else { "○" },
                occurrence.task.recurrence,
                occurrence.task.title,
                occurrence.task.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    /// Prints raw task definitions.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "TYPE", "DAYS", "DATE", "CREATED"]);
        for task in tasks {
            let schedule = match task.recurrence {
                Recurrence::Weekly => super::task::join_recur_days(&task.recur_days),
                _ => String::new(),
            };
            table.add_row(row![
                task.id,
                task.title,
                task.recurrence,
                schedule,
                task.date.map(|d| d.to_string()).unwrap_or_default(),
                task.created_at.format("%Y-%m-%d %H:%M")
            ]);
        }
        table.printstd();
    }

    /// Prints the per-day completion counts of a month.
    pub fn month(report: &MonthReport) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "DONE", "TOTAL", "PROGRESS"]);
        for stat in report.active_days() {
            table.add_row(row![
                stat.date,
                stat.date.format("%a"),
                stat.completed,
                stat.total,
                format!("{}%", stat.percentage())
            ]);
        }
        table.add_row(row![
            "TOTAL",
            "",
            report.completed_tasks,
            report.total_tasks,
            format!("{}%", report.completion_rate())
        ]);
        table.printstd();
    }
}
