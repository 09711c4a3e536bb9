// src/project.rs

use std::path::{Path, PathBuf};

use crate::config::{resolve_config, ConfigFile};
use crate::errors::{LaunchError, Result};
use crate::fs::FileSystem;

/// A project root together with the configuration that applies to it.
///
/// All relative paths in the configuration resolve against `root`, and every
/// command runs with `root` as its working directory.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: ConfigFile,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: ConfigFile) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Check that `root` is a directory and resolve its configuration.
    pub fn load(fs: &dyn FileSystem, root: &Path, explicit_config: Option<&Path>) -> Result<Self> {
        if !fs.is_dir(root) {
            return Err(LaunchError::ConfigError(format!(
                "project root {:?} is not a directory",
                root
            )));
        }

        let config = resolve_config(fs, root, explicit_config)?;
        Ok(Self::new(root, config))
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(&self.config.dependency_marker)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(&self.config.log_file)
    }
}
