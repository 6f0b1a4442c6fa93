//! Configuration loading for boolcalc.
//!
//! The config file lives at `~/.boolcalc/config.toml`. Every section and field
//! is optional; a missing file is not an error.
//!
//! ```toml
//! [app]
//! mode = "menu"
//!
//! [input]
//! policy = "strict"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use boolcalc_types::InputPolicy;

const CONFIG_DIR: &str = ".boolcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct BoolcalcConfig {
    pub app: Option<AppConfig>,
    pub input: Option<InputConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path.as_path(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Run mode: "menu", "tables" or "demo". Validated by the binary.
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// How numbers outside {0, 1} are treated. Default: strict.
    #[serde(default)]
    pub policy: InputPolicy,
}

impl BoolcalcConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    #[must_use]
    pub fn input_policy(&self) -> InputPolicy {
        self.input
            .as_ref()
            .map(|input| input.policy)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.app.as_ref().and_then(|app| app.mode.as_deref())
    }
}
