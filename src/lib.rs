// src/lib.rs

pub mod cli;
pub mod config;
pub mod deps;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod project;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::exec::RealCommandRunner;
use crate::fs::RealFileSystem;
use crate::project::Project;

pub use crate::launcher::launch;

/// High-level entry point used by `main.rs`.
///
/// Resolves the project root and configuration, then runs the launch flow
/// with real processes. Returns the exit code for the launcher process.
pub async fn run(args: CliArgs) -> Result<i32> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("determining current directory")?,
    };

    let fs = RealFileSystem;
    let project = Project::load(&fs, &root, args.config.as_deref())
        .with_context(|| format!("loading project at {:?}", root))?;
    debug!(?project, "resolved project");

    let mut runner = RealCommandRunner;
    let code = launch(&project, &fs, &mut runner).await?;
    Ok(code)
}
