#![allow(dead_code)]

use std::path::{Path, PathBuf};

use devlaunch::config::{ConfigFile, RawConfigFile};
use devlaunch::project::Project;

/// Builder for `ConfigFile` starting from the built-in defaults.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn package_manager(mut self, program: &str) -> Self {
        self.config.package_manager = program.to_string();
        self
    }

    pub fn install_args(mut self, args: &[&str]) -> Self {
        self.config.install_args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn dev_args(mut self, args: &[&str]) -> Self {
        self.config.dev_args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn dependency_marker(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dependency_marker = path.into();
        self
    }

    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_file = path.into();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    pub fn project_at(self, root: impl AsRef<Path>) -> Project {
        Project::new(root.as_ref(), self.build())
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
