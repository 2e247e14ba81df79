use super::range::TimeRange;

/// A unit of logged work as stored in the `task` table.
///
/// `project` carries the label of the linked project when the record comes
/// out of a query; it is never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub parent_id: Option<i64>,
    pub label: String,
    pub logged_at: String,
    pub minutes_logged: Option<f64>,
    pub project_id: Option<i64>,
    pub project: Option<String>,
}

impl Task {
    pub fn new(label: &str, logged_at: &str, project_id: Option<i64>) -> Self {
        Task {
            id: None,
            parent_id: None,
            label: label.to_string(),
            logged_at: logged_at.to_string(),
            minutes_logged: None,
            project_id,
            project: None,
        }
    }
}

/// Narrows a task query. An empty filter returns every task.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub range: Option<TimeRange>,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn project(mut self, project_id: Option<i64>) -> Self {
        self.project_id = project_id;
        self
    }

    pub fn range(mut self, range: Option<TimeRange>) -> Self {
        self.range = range;
        self
    }
}
