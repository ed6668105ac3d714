//! `savenus.toml` loading.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! (`SAVENUS_MENU`, `SAVENUS_LOG`), then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "savenus.toml";
pub const MENU_ENV: &str = "SAVENUS_MENU";
pub const LOG_ENV: &str = "SAVENUS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path} does not exist")]
    Missing { path: PathBuf },
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error("failed to load .env file")]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("menu.path must not be empty")]
    EmptyMenuPath,
    #[error("logging.filter must not be empty")]
    EmptyLogFilter,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub menu: MenuConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// JSON menu snapshot read by `sort`
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Load `.env` from the working directory or its parents. A missing file
/// is fine; a malformed one is an error.
pub fn load_env_file() -> Result<(), ConfigLoadError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

impl CliConfig {
    /// Load `path`. A missing file yields defaults unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            if required {
                return Err(ConfigLoadError::Missing {
                    path: path.to_path_buf(),
                });
            }
            return Ok(Self::default());
        }

        let raw =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_toml(&raw).map_err(|err| match err {
            ConfigLoadError::Parse { source, .. } => ConfigLoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigLoadError> {
        let config: CliConfig =
            toml::from_str(raw).map_err(|source| ConfigLoadError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through `lookup` so callers control
    /// where variables come from.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigGuardRailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(menu) = lookup(MENU_ENV) {
            self.menu.path = Some(PathBuf::from(menu));
        }
        if let Some(filter) = lookup(LOG_ENV) {
            self.logging.filter = filter;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self
            .menu
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigGuardRailError::EmptyMenuPath);
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigGuardRailError::EmptyLogFilter);
        }
        Ok(())
    }

    /// The menu snapshot to read, preferring an explicit flag.
    pub fn menu_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf).or_else(|| self.menu.path.clone())
    }
}
