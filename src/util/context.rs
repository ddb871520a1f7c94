//! Global context for graphinfo operations.
//!
//! Provides centralized access to configuration, paths, and environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::graph::snapshot::SNAPSHOT_NAME;
use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global configuration file, if a home directory is known
    global_config: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            global_config: global_config_path(),
        }
    }

    /// Override the global configuration file path.
    pub fn with_global_config(mut self, path: Option<PathBuf>) -> Self {
        self.global_config = path;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Find `BuildGraph.toml` starting from cwd and searching upward.
    pub fn find_snapshot(&self) -> Option<PathBuf> {
        self.cwd
            .ancestors()
            .map(|dir| dir.join(SNAPSHOT_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Get the project root: the directory holding the snapshot, or cwd.
    pub fn project_root(&self) -> PathBuf {
        self.find_snapshot()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Load the merged global and project configuration.
    pub fn config(&self) -> Config {
        load_config(
            self.global_config.as_deref(),
            &project_config_path(&self.project_root()),
        )
    }
}
