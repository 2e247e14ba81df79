//! Ledger initialization.
//!
//! Writes a default `config.json` when none exists and creates the ledger
//! database with its schema. An existing database is never touched.

use crate::{
    db::db::Db,
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_init_args: InitArgs) -> Result<()> {
    let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    if !config_path.exists() {
        Config::populated().save_to(&config_path)?;
        msg_success!(Message::ConfigSaved(config_path));
    }

    let db_path = Db::path()?;
    if db_path.exists() {
        msg_bail_anyhow!(Message::DatabaseAlreadyExists(db_path));
    }

    Db::open(&db_path)?;
    msg_success!(Message::DatabaseCreated(db_path));

    Ok(())
}
