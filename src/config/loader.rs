// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// File name looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "devlaunch.toml";

/// Load an override file and return the raw, unvalidated `RawConfigFile`.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load an override file and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Work out which configuration applies to `root`.
///
/// - An explicit path must exist and parse.
/// - Otherwise `<root>/devlaunch.toml` is used if it is a file.
/// - Otherwise built-in defaults apply.
pub fn resolve_config(
    fs: &dyn FileSystem,
    root: &Path,
    explicit: Option<&Path>,
) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading explicit config file");
        return load_and_validate(fs, path);
    }

    let default_path = default_config_path(root);
    if fs.is_file(&default_path) {
        debug!(path = %default_path.display(), "loading project config file");
        load_and_validate(fs, &default_path)
    } else {
        debug!("no config file found; using built-in defaults");
        Ok(ConfigFile::default())
    }
}

pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}
