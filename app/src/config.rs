use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use teams_core::IdStrategy;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/teams";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The team collection resource.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Unset means requests wait as long as the server takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            id_strategy: IdStrategy::default(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load from `path`, or the per-user config file. A missing file yields
    /// the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_string_lossy().to_string(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<(), ConfigError> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&config_path, toml_content).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })
    }

    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(config_file_in(&config_dir))
    }

    /// Command-line / environment value wins over the file.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn config_file_in(config_dir: &Path) -> PathBuf {
    config_dir.join("teams").join("config.toml")
}
