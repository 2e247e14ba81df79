use crate::libs::error::{LedgerError, LedgerResult};
use crate::libs::task::{Task, TaskFilter};
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO task (label, logged_at, project_id) VALUES (?1, ?2, ?3)";
const ACCUMULATE_TIME: &str = "UPDATE task SET minutes_logged = COALESCE(minutes_logged, 0) + ?2 WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT t.id, t.parent_id, t.label, t.logged_at, t.minutes_logged, t.project_id, p.label
    FROM task t
    LEFT JOIN project p ON p.id = t.project_id";
const WHERE_FILTER: &str = "WHERE (?1 IS NULL OR t.project_id = ?1)
    AND (?2 IS NULL OR datetime(t.logged_at) >= datetime(?2))
    AND (?3 IS NULL OR datetime(t.logged_at) <= datetime(?3))";
const ORDER_NEWEST_FIRST: &str = "ORDER BY datetime(t.logged_at) DESC, t.id DESC";
const WHERE_ID: &str = "WHERE t.id = ?1";

pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Stores a task and returns its id. `logged_at` is kept exactly as given.
    pub fn insert(&self, task: &Task) -> LedgerResult<i64> {
        self.conn.execute(INSERT_TASK, params![task.label, task.logged_at, task.project_id])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(format!("task {} inserted at {}", id, task.logged_at));

        Ok(id)
    }

    /// Adds `minutes` to the time logged against a task.
    ///
    /// The addition happens inside a single `UPDATE` so there is no window
    /// between reading the old total and writing the new one.
    pub fn accumulate_time(&self, task_id: i64, minutes: f64) -> LedgerResult<()> {
        let affected = self.conn.execute(ACCUMULATE_TIME, params![task_id, minutes])?;
        if affected == 0 {
            return Err(LedgerError::TaskNotFound(task_id));
        }
        msg_debug!(format!("{} minute(s) added to task {}", minutes, task_id));

        Ok(())
    }

    pub fn get_by_id(&self, task_id: i64) -> LedgerResult<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![task_id], task_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Returns the matching tasks, newest `logged_at` first. Range bounds are inclusive.
    pub fn fetch(&self, filter: &TaskFilter) -> LedgerResult<Vec<Task>> {
        let (from, until) = match &filter.range {
            Some(range) => (Some(range.from.as_str()), Some(range.until.as_str())),
            None => (None, None),
        };

        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_FILTER, ORDER_NEWEST_FIRST))?;
        let task_iter = stmt.query_map(params![filter.project_id, from, until], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        msg_debug!(format!("{} task(s) matched {:?}", tasks.len(), filter));

        Ok(tasks)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        parent_id: row.get(1)?,
        label: row.get(2)?,
        logged_at: row.get(3)?,
        minutes_logged: row.get(4)?,
        project_id: row.get(5)?,
        project: row.get(6)?,
    })
}
