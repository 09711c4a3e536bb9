// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LaunchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_package_manager(cfg)?;
    validate_args("install_args", &cfg.install_args)?;
    validate_args("dev_args", &cfg.dev_args)?;
    validate_paths(cfg)?;
    Ok(())
}

fn validate_package_manager(cfg: &RawConfigFile) -> Result<()> {
    if cfg.package_manager.trim().is_empty() {
        return Err(LaunchError::ConfigError(
            "package_manager must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_args(field: &str, args: &[String]) -> Result<()> {
    if let Some(idx) = args.iter().position(|a| a.is_empty()) {
        return Err(LaunchError::ConfigError(format!(
            "{field}[{idx}] is an empty string"
        )));
    }
    Ok(())
}

fn validate_paths(cfg: &RawConfigFile) -> Result<()> {
    if cfg.dependency_marker.as_os_str().is_empty() {
        return Err(LaunchError::ConfigError(
            "dependency_marker must not be empty".to_string(),
        ));
    }

    // `logs/` or `..` would leave us with a directory, not a file to append to.
    if cfg.log_file.file_name().is_none() {
        return Err(LaunchError::ConfigError(format!(
            "log_file {:?} does not name a file",
            cfg.log_file
        )));
    }

    Ok(())
}
