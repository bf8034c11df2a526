use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// File name of the config inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Error type for reading the config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read config.toml from the data directory. A missing file gives defaults.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    toml::from_str(&config_text).map_err(|e| ConfigError::ParseError {
        path: config_path,
        source: e,
    })
}
