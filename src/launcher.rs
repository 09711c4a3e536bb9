// src/launcher.rs

//! The launch flow: dependency check, then the supervised dev server.

use std::path::Path;

use tracing::{error, info, warn};

use crate::deps::ensure_dependencies;
use crate::errors::{LaunchError, Result};
use crate::exec::{CommandRunner, LaunchLog};
use crate::fs::FileSystem;
use crate::project::Project;

/// Exit code reported when dependency installation fails.
pub const INSTALL_FAILED_EXIT_CODE: i32 = 1;

/// Run the full flow and return the exit code the launcher should exit with.
///
/// A failed dependency install is reported and turned into
/// [`INSTALL_FAILED_EXIT_CODE`]; the dev server is not started. A dev server
/// that exits non-zero is reported and its code returned as-is. Errors
/// starting the dev server itself propagate.
pub async fn launch<R>(project: &Project, fs: &dyn FileSystem, runner: &mut R) -> Result<i32>
where
    R: CommandRunner + ?Sized,
{
    info!(root = %project.root.display(), "starting development launcher");

    let log_path = project.log_path();

    if let Err(err) = ensure_dependencies(project, fs, &mut *runner).await {
        error!(error = %err, "dependency installation failed");
        record_install_failure(&log_path, &err).await;
        return Ok(INSTALL_FAILED_EXIT_CODE);
    }

    let dev = project.config.dev_command();
    let code = runner
        .run_supervised(&dev, &project.root, &log_path)
        .await?;

    if code == 0 {
        info!(
            log_file = %log_path.display(),
            "development server exited cleanly; full log written to log file"
        );
    } else {
        let resolved = tokio::fs::canonicalize(&log_path)
            .await
            .unwrap_or_else(|_| log_path.clone());
        warn!(
            exit_code = code,
            log_file = %resolved.display(),
            "development server exited with errors; review the log file for diagnostics"
        );
    }

    Ok(code)
}

/// Append the install failure to the launch log. Errors here are only logged.
async fn record_install_failure(log_path: &Path, err: &LaunchError) {
    let message = format!("Dependency installation failed: {err}");
    match LaunchLog::open(log_path).await {
        Ok(mut log) => {
            if let Err(e) = log.write_note(&message).await {
                warn!(log_file = %log_path.display(), error = %e, "could not write to launch log");
            }
        }
        Err(e) => {
            warn!(log_file = %log_path.display(), error = %e, "could not open launch log");
        }
    }
}
