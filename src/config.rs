//! Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory when no
/// `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "roster-board.yaml";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

/// Server-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the roster SQLite database file.
    #[serde(default = "default_roster_db_path")]
    pub roster_db_path: PathBuf,

    /// Path to the board SQLite database file.
    #[serde(default = "default_board_db_path")]
    pub board_db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            roster_db_path: default_roster_db_path(),
            board_db_path: default_board_db_path(),
        }
    }
}

fn default_port() -> u16 {
    8370
}

fn default_roster_db_path() -> PathBuf {
    PathBuf::from(".roster-board/roster.db")
}

fn default_board_db_path() -> PathBuf {
    PathBuf::from(".roster-board/board.db")
}

impl Config {
    /// Load configuration. An explicit path must exist and parse; without
    /// one, the default path is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
