use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskLogged(i64),
    TaskLoggedToProject(i64, String),
    TimeLogged { task_id: i64, total: String },
    NoTasksFound,

    // === PROJECT MESSAGES ===
    ProjectAdding(String),
    ProjectAdded(String, i64),
    NoProjectsFound,

    // === REPORT MESSAGES ===
    UnassignedBucket,
    TasksTotal(usize, String),

    // === STORAGE MESSAGES ===
    DatabaseCreated(PathBuf),
    DatabaseAlreadyExists(PathBuf),
    ConfigSaved(PathBuf),
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
