//! # Qtask
//!
//! A personal command-line ledger for logging work, optionally against named
//! projects, and querying it back over time ranges.
//!
//! ```text
//! qtask add project annotation
//! qtask log "Conference call with review panel"
//! qtask log "Added parsing script for tool X" to annotation on 2024-01-01
//! qtask log 5 hours against task 2
//! qtask list annotation work
//! qtask list work in last 30 days
//! qtask report work between 2024-01-01 and 2024-01-31
//! ```
//!
//! Commands are matched against small fixed grammars (see [`libs::grammar`]),
//! executed by [`libs::ledger::Ledger`] against a SQLite file and rendered as
//! tables.

pub mod commands;
pub mod db;
pub mod libs;
