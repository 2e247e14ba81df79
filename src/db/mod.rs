//! SQLite persistence for the ledger.
//!
//! Two tables: `project` and `task`. Each has a small store type borrowing
//! the connection held by [`db::Db`], which also applies the schema
//! migrations on open.

pub mod db;
pub mod migrations;
pub mod projects;
pub mod tasks;
