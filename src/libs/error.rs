//! Domain errors raised while parsing and executing ledger commands.
//!
//! Every variant is terminal for the current invocation and names the
//! offending token or value so the single error line printed by `main`
//! tells the user what to fix.

use thiserror::Error;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The token sequence matched no row of the verb's pattern table.
    #[error("I didn't understand your {0} command. See 'qtask help {0}' for examples")]
    Syntax(String),

    /// A time unit that cannot be resolved, including the deliberate month refusal.
    #[error("Unsupported time unit '{unit}': {detail}")]
    UnknownUnit { unit: String, detail: &'static str },

    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Task with ID {0} not found")]
    TaskNotFound(i64),

    #[error("'{0}' is a reserved word and can't be used as a project label")]
    ReservedLabel(String),

    #[error("Project '{0}' already exists")]
    ProjectExists(String),

    #[error("Expected a non-negative number, got '{0}'")]
    InvalidNumber(String),

    #[error("Unrecognized date '{0}', expected YYYY-MM-DD with an optional HH:MM[:SS] time")]
    InvalidDate(String),

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

impl LedgerError {
    pub(crate) fn unknown_unit(unit: &str, detail: &'static str) -> Self {
        LedgerError::UnknownUnit {
            unit: unit.to_string(),
            detail,
        }
    }
}
