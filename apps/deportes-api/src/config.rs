use core_config::{
    AppInfo, FromEnv, app_info, server::ServerConfig, storage::StorageConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Catalog shipped next to this crate, used when `DEPORTES_FILE` is unset
const DEFAULT_DATA_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/db/deportes.json");
/// Landing page shipped next to this crate, used when `INDEX_FILE` is unset
const DEFAULT_INDEX_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/index.html");

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let storage = StorageConfig::from_env_or(DEFAULT_DATA_FILE, DEFAULT_INDEX_FILE);

        Ok(Self {
            app: app_info!(),
            server,
            storage,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_paths_point_at_shipped_files() {
        temp_env::with_vars(
            [
                ("DEPORTES_FILE", None::<&str>),
                ("INDEX_FILE", None::<&str>),
                ("PORT", None::<&str>),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert!(config.storage.index_file.is_absolute());
                assert!(config.storage.index_file.is_file());
                assert!(config.storage.data_file.is_file());
                assert!(config.storage.data_file.ends_with("db/deportes.json"));
            },
        );
    }

    #[test]
    fn test_env_overrides_default_paths() {
        temp_env::with_vars(
            [
                ("DEPORTES_FILE", Some("/var/lib/deportes/data.json")),
                ("INDEX_FILE", Some("/srv/www/index.html")),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(
                    config.storage.data_file,
                    PathBuf::from("/var/lib/deportes/data.json")
                );
                assert_eq!(config.storage.index_file, PathBuf::from("/srv/www/index.html"));
            },
        );
    }
}
