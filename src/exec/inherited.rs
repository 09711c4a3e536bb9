// src/exec/inherited.rs

use std::path::Path;

use tracing::info;

use crate::errors::{LaunchError, Result};
use crate::exec::exit_code;
use crate::types::CommandLine;

/// Run `command` in `cwd` with the launcher's stdin/stdout/stderr and wait
/// for it. Nothing is captured or logged to file.
pub async fn run_inherited(command: &CommandLine, cwd: &Path) -> Result<i32> {
    info!(command = %command, cwd = %cwd.display(), "running command");

    let status = command
        .to_command(cwd)
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            command: command.to_string(),
            source,
        })?;

    Ok(exit_code(status))
}
