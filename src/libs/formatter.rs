//! Formatting helpers for query results.
//!
//! ## Durations
//!
//! Logged time is kept in minutes and shown in the unit that reads best:
//!
//! | Minutes    | Rendered      |
//! |------------|---------------|
//! | none       | nothing       |
//! | `45`       | `45 minutes`  |
//! | `90`       | `1.5 hours`   |
//! | `600`      | `10.0 hours`  |
//!
//! ## Grouping
//!
//! Reports bucket tasks by project label. Tasks without a project land in an
//! `Unassigned` bucket. Buckets come out in lexical label order and each
//! keeps the newest-first order of the query.
//!
//! ```rust
//! use qtask::libs::formatter::format_minutes;
//!
//! assert_eq!(format_minutes(Some(90.0)).as_deref(), Some("1.5 hours"));
//! assert_eq!(format_minutes(Some(45.0)).as_deref(), Some("45 minutes"));
//! assert_eq!(format_minutes(None), None);
//! ```

use super::messages::Message;
use super::task::Task;
use std::collections::BTreeMap;

/// Renders a minute count, or `None` when no time has been logged.
pub fn format_minutes(minutes: Option<f64>) -> Option<String> {
    let minutes = minutes?;
    if minutes < 60.0 {
        Some(format!("{} minutes", minutes))
    } else {
        Some(format!("{:.1} hours", minutes / 60.0))
    }
}

/// Tasks sharing a project label, or the tasks with no project at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub unassigned: bool,
    pub tasks: Vec<Task>,
}

impl Bucket {
    /// Sum of the logged minutes, `None` if nothing in the bucket has time logged.
    pub fn total_minutes(&self) -> Option<f64> {
        self.tasks
            .iter()
            .filter_map(|task| task.minutes_logged)
            .fold(None, |total, minutes| Some(total.unwrap_or(0.0) + minutes))
    }
}

/// Splits tasks into per-project buckets ordered by label.
///
/// A project literally named like the sentinel still gets its own bucket;
/// on equal labels the unassigned bucket sorts last.
pub fn group_by_project(tasks: Vec<Task>) -> Vec<Bucket> {
    let mut buckets: BTreeMap<(String, bool), Vec<Task>> = BTreeMap::new();

    for task in tasks {
        let key = match &task.project {
            Some(label) => (label.clone(), false),
            None => (Message::UnassignedBucket.to_string(), true),
        };
        buckets.entry(key).or_default().push(task);
    }

    buckets
        .into_iter()
        .map(|((label, unassigned), tasks)| Bucket { label, unassigned, tasks })
        .collect()
}
