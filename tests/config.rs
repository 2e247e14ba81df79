#[cfg(test)]
mod tests {
    use qtask::libs::config::{Config, StorageConfig, CONFIG_FILE_NAME};
    use qtask::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        storage: DataStorage,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext {
                storage: DataStorage::at(temp_dir.path().join("qtask")),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_default(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();

        assert_eq!(Config::read_from(&path).unwrap(), Config::default());
        assert!(!path.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_get_path_creates_directory(ctx: &mut ConfigTestContext) {
        assert!(!ctx.storage.base_path().exists());

        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(ctx.storage.base_path().is_dir());
        assert_eq!(path, ctx.storage.base_path().join("config.json"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        let config = Config {
            storage: Some(StorageConfig {
                db_file: "ledger.db".to_string(),
            }),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_populated_uses_default_db_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        Config::populated().save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"db_file\": \"qtask.db\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_object_is_accepted(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{}").unwrap();

        assert_eq!(Config::read_from(&path).unwrap().storage, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::read_from(&path).is_err());
    }
}
