//! Application configuration.
//!
//! The configuration lives in `config.json` next to the ledger database in
//! the directory resolved by [`DataStorage`]. Every section is optional and a
//! missing file is equivalent to the defaults, so qtask works without any
//! setup beyond `qtask init`.
//!
//! ```json
//! {
//!   "storage": {
//!     "db_file": "qtask.db"
//!   }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the ledger is kept inside the data directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name of the SQLite database.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DB_FILE_NAME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file has been written yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(config_file_path)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Returns a configuration with every section populated with its defaults.
    pub fn populated() -> Self {
        Config {
            storage: Some(StorageConfig::default()),
        }
    }
}
