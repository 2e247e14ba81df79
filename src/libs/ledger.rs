//! Runs parsed [`Action`]s against the store.
//!
//! The ledger owns the database connection for the duration of one command.
//! Label lookups, time range resolution and grouping happen here so that the
//! command layer only has to parse tokens and render the [`Outcome`].

use super::error::{LedgerError, LedgerResult};
use super::formatter::{group_by_project, Bucket};
use super::grammar::{Action, Grouping, LogEntry, TaskQuery};
use super::range::stamp;
use super::task::{Task, TaskFilter};
use crate::db::db::Db;
use crate::db::projects::{Project, Projects};
use crate::db::tasks::Tasks;
use chrono::NaiveDateTime;

/// What an action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ProjectAdded { id: i64, label: String },
    Logged { task_id: i64, project: Option<String> },
    TimeAccumulated { task_id: i64, total_minutes: Option<f64> },
    Projects(Vec<Project>),
    Tasks(Vec<Task>),
    Report(Vec<Bucket>),
}

pub struct Ledger {
    db: Db,
}

impl Ledger {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Executes one action. `now` stands in for the wall clock: it stamps
    /// new records and anchors relative ranges.
    pub fn execute(&mut self, action: Action, now: NaiveDateTime) -> LedgerResult<Outcome> {
        match action {
            Action::AddProject { label } => self.add_project(label, now),
            Action::Log(entry) => self.log(entry, now),
            Action::Accumulate { task_id, minutes } => self.accumulate(task_id, minutes),
            Action::ListProjects => Ok(Outcome::Projects(Projects::new(&self.db.conn).list()?)),
            Action::ListTasks(query) => self.list(query, now),
        }
    }

    fn add_project(&mut self, label: String, now: NaiveDateTime) -> LedgerResult<Outcome> {
        let tx = self.db.conn.transaction()?;
        let id = Projects::new(&tx).create(&label, &stamp(now))?;
        tx.commit()?;

        Ok(Outcome::ProjectAdded { id, label })
    }

    fn log(&mut self, entry: LogEntry, now: NaiveDateTime) -> LedgerResult<Outcome> {
        let project_id = match &entry.project {
            Some(label) => Some(self.project_id(label)?),
            None => None,
        };
        let logged_at = entry.at.unwrap_or_else(|| stamp(now));

        let task = Task::new(&entry.label, &logged_at, project_id);
        let task_id = Tasks::new(&self.db.conn).insert(&task)?;

        Ok(Outcome::Logged {
            task_id,
            project: entry.project,
        })
    }

    fn accumulate(&mut self, task_id: i64, minutes: f64) -> LedgerResult<Outcome> {
        let tasks = Tasks::new(&self.db.conn);
        tasks.accumulate_time(task_id, minutes)?;
        let total_minutes = tasks.get_by_id(task_id)?.and_then(|task| task.minutes_logged);

        Ok(Outcome::TimeAccumulated { task_id, total_minutes })
    }

    fn list(&mut self, query: TaskQuery, now: NaiveDateTime) -> LedgerResult<Outcome> {
        let project_id = match &query.project {
            Some(label) => Some(self.project_id(label)?),
            None => None,
        };
        let filter = TaskFilter::all().project(project_id).range(query.range.resolve(now));
        let tasks = Tasks::new(&self.db.conn).fetch(&filter)?;

        Ok(match query.grouping {
            Grouping::Flat => Outcome::Tasks(tasks),
            Grouping::ByProject => Outcome::Report(group_by_project(tasks)),
        })
    }

    fn project_id(&self, label: &str) -> LedgerResult<i64> {
        Projects::new(&self.db.conn)
            .find_id(label)?
            .ok_or_else(|| LedgerError::ProjectNotFound(label.to_string()))
    }
}
