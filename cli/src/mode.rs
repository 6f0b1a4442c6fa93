//! Top-level run mode selection.

use std::env;

use anyhow::{Result, bail};

use boolcalc_config::BoolcalcConfig;

pub const MODE_ENV_VAR: &str = "BOOLCALC_MODE";

pub const USAGE: &str = "Usage: boolcalc [menu|tables|demo]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Interactive numbered menu.
    #[default]
    Menu,
    /// Print every truth table and exit.
    Tables,
    /// Print the walkthrough and exit.
    Demo,
    Help,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Menu => "menu",
            RunMode::Tables => "tables",
            RunMode::Demo => "demo",
            RunMode::Help => "help",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "menu" => Some(RunMode::Menu),
            "tables" | "table" => Some(RunMode::Tables),
            "demo" => Some(RunMode::Demo),
            "-h" | "--help" | "help" => Some(RunMode::Help),
            _ => None,
        }
    }

    fn from_arg(arg: Option<&str>) -> Result<Option<Self>> {
        let Some(arg) = arg else {
            return Ok(None);
        };
        match Self::parse(arg) {
            Some(mode) => Ok(Some(mode)),
            None => bail!("unknown mode '{arg}'\n{USAGE}"),
        }
    }

    fn from_config(config: Option<&BoolcalcConfig>) -> Option<Self> {
        let raw = config?.mode()?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown mode in config: {}", raw);
        }
        mode
    }

    fn from_env() -> Option<Self> {
        Self::from_env_value(env::var(MODE_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Option<Self> {
        let raw = value?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown mode in {}: {}", MODE_ENV_VAR, raw);
        }
        mode
    }

    /// Argument first, then config, then environment, then the menu.
    pub fn resolve(arg: Option<&str>, config: Option<&BoolcalcConfig>) -> Result<Self> {
        if let Some(mode) = Self::from_arg(arg)? {
            return Ok(mode);
        }
        Ok(Self::from_config(config)
            .or_else(Self::from_env)
            .unwrap_or_default())
    }
}
