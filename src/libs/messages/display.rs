use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            Message::TaskLogged(id) => format!("Task id:{} logged", id),
            Message::TaskLoggedToProject(id, project) => format!("Task id:{} logged to project {}", id, project),
            Message::TimeLogged { task_id, total } => format!("Time logged against task {} (total: {})", task_id, total),
            Message::NoTasksFound => "No work found for that period.".to_string(),

            Message::ProjectAdding(label) => format!("Attempting to insert project: {}", label),
            Message::ProjectAdded(label, id) => format!("Project '{}' added to the database with id={}", label, id),
            Message::NoProjectsFound => "No projects found. Add one with 'qtask add project <label>'.".to_string(),

            Message::UnassignedBucket => "Unassigned".to_string(),
            Message::TasksTotal(count, total) => format!("{} task(s), {} logged", count, total),

            Message::DatabaseCreated(path) => format!("Ledger created at {}", path.display()),
            Message::DatabaseAlreadyExists(path) => format!(
                "The database file ({}) already exists. Cowardly refusing to stomp over it. \
                 Delete that file first if you want to re-initialize your ledger.",
                path.display()
            ),
            Message::ConfigSaved(path) => format!("Configuration written to {}", path.display()),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };
        write!(f, "{}", text)
    }
}
