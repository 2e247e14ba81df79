use crate::libs::error::{LedgerError, LedgerResult};
use crate::msg_debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Label the grammar uses as a positional keyword; never allowed as a project.
pub const RESERVED_LABEL: &str = "work";

const INSERT_PROJECT: &str = "INSERT INTO project (label, created_at) VALUES (?1, ?2)";
const SELECT_ALL_PROJECTS: &str = "SELECT id, label, created_at FROM project ORDER BY label, id";
const SELECT_PROJECT_ID_BY_LABEL: &str = "SELECT id FROM project WHERE label = ?1 ORDER BY id LIMIT 1";

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub label: String,
    pub created_at: String,
}

impl Project {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Project {
            id: row.get(0)?,
            label: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

pub struct Projects<'a> {
    conn: &'a Connection,
}

impl<'a> Projects<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Creates a project and returns its id.
    ///
    /// Fails with [`LedgerError::ReservedLabel`] for `work` and with
    /// [`LedgerError::ProjectExists`] when the label is already taken.
    pub fn create(&self, label: &str, created_at: &str) -> LedgerResult<i64> {
        if label == RESERVED_LABEL {
            return Err(LedgerError::ReservedLabel(label.to_string()));
        }
        if self.find_id(label)?.is_some() {
            return Err(LedgerError::ProjectExists(label.to_string()));
        }

        self.conn.execute(INSERT_PROJECT, params![label, created_at])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(format!("project '{}' inserted with id {}", label, id));

        Ok(id)
    }

    /// Looks a project up by label. Ledgers written before labels were unique
    /// may hold duplicates; the oldest one wins.
    pub fn find_id(&self, label: &str) -> LedgerResult<Option<i64>> {
        self.conn
            .query_row(SELECT_PROJECT_ID_BY_LABEL, params![label], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    pub fn list(&self) -> LedgerResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_PROJECTS)?;
        let project_iter = stmt.query_map([], Project::from_row)?;

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }
        Ok(projects)
    }
}
