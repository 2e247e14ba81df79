use super::formatter::{format_minutes, Bucket};
use super::messages::Message;
use super::task::Task;
use crate::db::projects::Project;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Flat task listing. Project and time cells stay empty when absent.
    pub fn tasks(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "LOGGED AT", "PROJECT", "TASK", "TIME"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.logged_at,
                task.project.as_deref().unwrap_or(""),
                task.label,
                format_minutes(task.minutes_logged).unwrap_or_default()
            ]);
        }

        table
    }

    pub fn projects(projects: &[Project]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "CREATED AT"]);
        for project in projects {
            table.add_row(row![project.id, project.label, project.created_at]);
        }

        table
    }

    /// One section per bucket: a `label (total)` header followed by its tasks.
    pub fn report(buckets: &[Bucket]) -> String {
        let mut out = String::new();

        for bucket in buckets {
            let total = format_minutes(bucket.total_minutes()).unwrap_or_else(|| "no time".to_string());
            out.push_str(&format!("\n{} ({})\n", bucket.label, Message::TasksTotal(bucket.tasks.len(), total)));
            out.push_str(&Self::tasks(&bucket.tasks).to_string());
        }

        out
    }
}
