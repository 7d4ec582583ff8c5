use crate::{env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "db/deportes.json";
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// File locations for the flat-file catalog.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// JSON file holding the whole collection
    pub data_file: PathBuf,
    /// Static landing page served at `/`
    pub index_file: PathBuf,
}

impl StorageConfig {
    pub fn new(data_file: impl Into<PathBuf>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            index_file: index_file.into(),
        }
    }
}

impl StorageConfig {
    /// Reads `DEPORTES_FILE` and `INDEX_FILE`, falling back to the given
    /// paths. Binaries pass paths anchored on their own crate directory so
    /// the result does not depend on the working directory.
    pub fn from_env_or(default_data_file: &str, default_index_file: &str) -> Self {
        Self::new(
            env_or_default("DEPORTES_FILE", default_data_file),
            env_or_default("INDEX_FILE", default_index_file),
        )
    }
}

impl FromEnv for StorageConfig {
    /// - DEPORTES_FILE: defaults to `db/deportes.json`
    /// - INDEX_FILE: defaults to `index.html`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_env_or(DEFAULT_DATA_FILE, DEFAULT_INDEX_FILE))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, DEFAULT_INDEX_FILE)
    }
}
