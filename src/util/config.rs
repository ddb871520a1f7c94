//! Configuration file support for graphinfo.
//!
//! graphinfo supports two configuration file locations:
//! - Global: `~/.graphinfo/config.toml` - User-wide defaults
//! - Project: `.graphinfo/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::describe::{DescribeOptions, OutputFormat};

/// graphinfo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default serialization format (json, toml)
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (defaults to true)
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.pretty.is_some() {
            self.output.pretty = other.output.pretty;
        }
    }

    /// Describe options from config, before CLI overrides.
    pub fn describe_options(&self) -> DescribeOptions {
        let defaults = DescribeOptions::default();
        DescribeOptions {
            format: self.output.format.unwrap_or(defaults.format),
            pretty: self.output.pretty.unwrap_or(defaults.pretty),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.graphinfo/config.toml)
/// 2. Global config (~/.graphinfo/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global graphinfo config directory (~/.graphinfo).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".graphinfo"))
}

/// Get the global config path (~/.graphinfo/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.graphinfo/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".graphinfo").join("config.toml")
}
