use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::ClipsConfig;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "clips.toml";

/// Error type for configuration loading
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

/// Parse config text
pub fn parse_config(text: &str) -> Result<ClipsConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Read and parse the config file at `path`
pub fn read_config(path: &Path) -> Result<ClipsConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `clips.toml` in `cwd` is used
/// when present; otherwise the defaults apply.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ClipsConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        read_config(&candidate)
    } else {
        tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        Ok(ClipsConfig::default())
    }
}
