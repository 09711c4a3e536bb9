// src/config/mod.rs

//! Launcher configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Locate and load the optional override file (`loader.rs`).
//! - Validate field sanity (`validate.rs`).
//!
//! Without an override file every field takes its built-in default, which
//! reproduces the plain `npm install` / `npm run dev` flow.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_from_path, resolve_config, DEFAULT_CONFIG_FILE,
};
pub use model::{ConfigFile, RawConfigFile};
