use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "qtask.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured ledger file and brings its schema up to date.
    pub fn new() -> Result<Db> {
        Self::open(Self::path()?)
    }

    /// Opens a ledger at an explicit location and brings its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Resolves the ledger file from the `storage` section of the config.
    pub fn path() -> Result<PathBuf> {
        let config = Config::read()?;
        let file_name = config.storage.map(|storage| storage.db_file).unwrap_or_else(|| DB_FILE_NAME.to_string());

        DataStorage::new().get_path(&file_name)
    }
}
