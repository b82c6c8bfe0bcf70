//! Configuration management

use crate::error::{QaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "qastore.toml";
pub const DEFAULT_STORE_FILE: &str = "questions.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const STORE_ENV: &str = "QASTORE_FILE";
pub const LOG_ENV: &str = "QASTORE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub store: PathBuf,
    pub log_level: String,
}

/// Optional keys read from qastore.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    store: Option<PathBuf>,
    log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: PathBuf::from(DEFAULT_STORE_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration: flags, then environment, then qastore.toml in
    /// `dir`, then defaults.
    pub fn resolve(dir: &Path, store_flag: Option<PathBuf>, level_flag: Option<String>) -> Result<Self> {
        let file = Self::load_file(dir)?;
        let defaults = Config::default();

        let store = store_flag
            .or_else(|| std::env::var_os(STORE_ENV).map(PathBuf::from))
            .or(file.store)
            .unwrap_or(defaults.store);

        let log_level = level_flag
            .or_else(|| std::env::var(LOG_ENV).ok())
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        if log_level.trim().is_empty() {
            return Err(QaError::Config("log level must not be empty".to_string()));
        }

        Ok(Config { store, log_level })
    }

    /// Read qastore.toml from `dir`; a missing file yields no overrides
    fn load_file(dir: &Path) -> Result<FileConfig> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
            Err(e) => return Err(QaError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }
}
