//! File-based configuration discovery.
//!
//! Searches the project root for `rove.toml`, then for a `package.json` with
//! a `rove` field. Flags always win over file values; a missing config file
//! just means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::cli::ModeArg;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found")]
    NotFound,

    #[error("invalid config in {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoveConfig {
    #[serde(default)]
    pub routes: RoutesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoutesConfig {
    /// App directory, relative to the project root unless absolute.
    #[serde(default)]
    pub app_dir: Option<PathBuf>,
    /// Recognized extensions in priority order.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub mode: Option<ModeArg>,
    /// Output file for `generate`, relative to the project root.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory. `rove.toml` takes
    /// precedence over `package.json`.
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("rove.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("rove").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    pub fn load(&self) -> Result<RoveConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            self.load_from_package_json(&path)
        } else {
            self.load_from_toml(&path)
        }
    }

    /// Like `load`, but a missing config file yields the defaults.
    pub fn load_or_default(&self) -> Result<RoveConfig> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound) => Ok(RoveConfig::default()),
            Err(err) => Err(err),
        }
    }

    fn load_from_toml(&self, path: &Path) -> Result<RoveConfig> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn load_from_package_json(&self, path: &Path) -> Result<RoveConfig> {
        let content = fs::read_to_string(path)?;
        let parsed: Value = serde_json::from_str(&content).map_err(|err| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let rove_value = parsed.get("rove").cloned().ok_or(ConfigError::NotFound)?;
        serde_json::from_value(rove_value).map_err(|err| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
