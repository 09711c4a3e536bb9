// src/deps.rs

//! Dependency check: install only when the marker directory is missing.
//!
//! The marker's existence is the whole test. A half-finished install that
//! left the directory behind counts as installed.

use tracing::info;

use crate::errors::{LaunchError, Result};
use crate::exec::CommandRunner;
use crate::fs::FileSystem;
use crate::project::Project;
use crate::types::DependencyStatus;

pub async fn ensure_dependencies<R>(
    project: &Project,
    fs: &dyn FileSystem,
    runner: &mut R,
) -> Result<DependencyStatus>
where
    R: CommandRunner + ?Sized,
{
    let marker = project.marker_path();
    let install = project.config.install_command();

    if fs.exists(&marker) {
        info!(
            marker = %marker.display(),
            "dependencies already installed; skipping `{install}`"
        );
        return Ok(DependencyStatus::AlreadyInstalled);
    }

    info!(command = %install, "installing dependencies");
    let code = runner.run_inherited(&install, &project.root).await?;
    if code != 0 {
        return Err(LaunchError::InstallFailed {
            command: install.to_string(),
            code,
        });
    }

    info!(command = %install, "dependencies installed");
    Ok(DependencyStatus::Installed)
}
