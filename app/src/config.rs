use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default listening port when neither the CLI, the environment, nor a
/// config file provides one.
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment label reported by `/health`.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default directory the static site is served from.
pub const DEFAULT_PUBLIC_DIR: &str = "app/public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl Config {
    /// Load configuration: optional TOML file first, then environment
    /// variables on top (`PORT`, `APP_ENV`, `PUBLIC_DIR`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Config::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line overrides, the highest-precedence layer.
    pub fn apply_cli(&mut self, port: Option<u16>, public_dir: Option<PathBuf>) {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(public_dir) = public_dir {
            self.public_dir = public_dir;
        }
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = env::var("PORT") {
            self.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        if let Ok(value) = env::var("APP_ENV") {
            self.environment = value;
        }
        if let Ok(value) = env::var("PUBLIC_DIR") {
            self.public_dir = PathBuf::from(value);
        }
        Ok(())
    }
}
