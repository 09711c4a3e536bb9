// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: running `devlaunch` with no arguments performs the
//! full install-then-serve flow in the current directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `devlaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "devlaunch",
    version,
    about = "Install dependencies if needed, then run the dev server with its output teed to a log file.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root. Commands run here and relative paths resolve against it.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Path to an override file (TOML).
    ///
    /// Default: `devlaunch.toml` in the project root, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
