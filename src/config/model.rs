// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::CommandLine;

/// Override file as read from TOML, before validation.
///
/// ```toml
/// package_manager = "pnpm"
/// install_args = ["install", "--frozen-lockfile"]
/// dev_args = ["run", "dev", "--", "--host", "0.0.0.0"]
/// dependency_marker = "node_modules"
/// log_file = "logs/dev-server.log"
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Executable used for both the install and the dev command.
    #[serde(default = "default_package_manager")]
    pub package_manager: String,

    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,

    #[serde(default = "default_dev_args")]
    pub dev_args: Vec<String>,

    /// Directory whose presence means "dependencies already installed".
    /// Relative to the project root.
    #[serde(default = "default_dependency_marker")]
    pub dependency_marker: PathBuf,

    /// Append-only log of every dev server run. Relative to the project root.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_package_manager() -> String {
    "npm".to_string()
}

fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

fn default_dev_args() -> Vec<String> {
    ["run", "dev", "--", "--host", "0.0.0.0"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_dependency_marker() -> PathBuf {
    PathBuf::from("node_modules")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs").join("dev-server.log")
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            install_args: default_install_args(),
            dev_args: default_dev_args(),
            dependency_marker: default_dependency_marker(),
            log_file: default_log_file(),
        }
    }
}

/// Validated launcher configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// `Default`, so the fields are known to be usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub package_manager: String,
    pub install_args: Vec<String>,
    pub dev_args: Vec<String>,
    pub dependency_marker: PathBuf,
    pub log_file: PathBuf,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            package_manager: raw.package_manager,
            install_args: raw.install_args,
            dev_args: raw.dev_args,
            dependency_marker: raw.dependency_marker,
            log_file: raw.log_file,
        }
    }

    pub fn install_command(&self) -> CommandLine {
        CommandLine::new(self.package_manager.clone(), self.install_args.iter().cloned())
    }

    pub fn dev_command(&self) -> CommandLine {
        CommandLine::new(self.package_manager.clone(), self.dev_args.iter().cloned())
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile::new_unchecked(RawConfigFile::default())
    }
}
