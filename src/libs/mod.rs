//! Core library modules for qtask.
//!
//! - `grammar`: turns command tokens into typed actions
//! - `range`: resolves relative and absolute time windows
//! - `ledger`: executes actions against the store
//! - `formatter` / `view`: renders results
//! - `config`, `data_storage`, `messages`, `error`: ambient plumbing
//!
//! ```rust
//! use chrono::NaiveDate;
//! use qtask::db::db::Db;
//! use qtask::libs::grammar::{parse, Verb};
//! use qtask::libs::ledger::{Ledger, Outcome};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut ledger = Ledger::new(Db::open(dir.path().join("qtask.db")).unwrap());
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//!
//! let action = parse(Verb::Log, &["Installed tool X".to_string()]).unwrap();
//! assert!(matches!(ledger.execute(action, now).unwrap(), Outcome::Logged { task_id: 1, .. }));
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod ledger;
pub mod messages;
pub mod range;
pub mod task;
pub mod view;
