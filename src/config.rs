//! Persisted settings and backend URL resolution.

use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;
use serde::{Deserialize, Serialize};

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the configured backend URL.
pub const API_URL_ENV: &str = "RIESGO_API_URL";
/// Backend URL used when neither the environment nor the config file set one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Persisted application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the risk decision backend.
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<Settings, ConfigError> {
    let path = config_path()?;
    load_from_path(&path)
}

/// Load settings from a specific path, returning defaults if it is missing.
pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist settings to the default location.
pub fn save(settings: &Settings) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(settings, &path)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a default config file if none exists, so the folder the UI opens
/// always holds something editable. Returns the config path.
pub fn ensure_seed_file() -> Result<PathBuf, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        save_to_path(&Settings::default(), &path)?;
    }
    Ok(path)
}

/// Resolve the backend base URL.
///
/// The environment override wins over the config file; blank values fall
/// through to the next source.
pub fn resolve_api_url(settings: &Settings) -> String {
    if let Ok(value) = std::env::var(API_URL_ENV) {
        let value = value.trim();
        if !value.is_empty() {
            return value.to_string();
        }
    }
    let configured = settings.api_url.trim();
    if configured.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        configured.to_string()
    }
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
