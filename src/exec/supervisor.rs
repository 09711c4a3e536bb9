// src/exec/supervisor.rs

//! Dev server supervision: spawn, tee merged output, wait, record exit code.

use std::io::{self, PipeReader};
use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::errors::{LaunchError, Result};
use crate::exec::exit_code;
use crate::exec::log_file::LaunchLog;
use crate::types::CommandLine;

/// Run `command` in `cwd`, copying each line of its output to `console` and
/// to the log at `log_path`, and return the child's exit code.
///
/// The child's stdout and stderr are both the write end of one OS pipe, so
/// the lines read here are in exactly the order the child wrote them.
///
/// A spawn failure is returned as [`LaunchError::Spawn`] after the header
/// has been written, so the log shows the attempt.
pub async fn stream_process<W>(
    command: &CommandLine,
    cwd: &Path,
    log_path: &Path,
    console: &mut W,
) -> Result<i32>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut log = LaunchLog::open(log_path).await?;
    log.write_header(command).await?;

    info!(
        command = %command,
        log_file = %log.path().display(),
        "starting supervised process"
    );

    let (reader, writer) = io::pipe()?;
    let mut cmd = command.to_command(cwd);
    cmd.stdout(writer.try_clone()?)
        .stderr(writer)
        .kill_on_drop(true);

    let spawned = cmd.spawn();
    // `cmd` still holds our copies of the write end; EOF only arrives once
    // they are closed.
    drop(cmd);
    let mut child = spawned.map_err(|source| LaunchError::Spawn {
        command: command.to_string(),
        source,
    })?;

    let mut output = BufReader::new(merged_reader(reader)?);
    let mut line_count: usize = 0;
    loop {
        let mut line = Vec::new();
        match output.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                console.write_all(&line).await?;
                console.flush().await?;
                log.write_line(&line).await?;
                line_count += 1;
            }
            Err(e) => {
                warn!(command = %command, error = %e, "failed reading child output");
                break;
            }
        }
    }
    debug!(command = %command, "child output closed");

    let status = child.wait().await?;
    let code = exit_code(status);
    log.write_footer(code).await?;

    info!(
        command = %command,
        exit_code = code,
        lines = line_count,
        "supervised process exited"
    );

    Ok(code)
}

/// Async view of the read end of the merged output pipe.
#[cfg(unix)]
fn merged_reader(reader: PipeReader) -> io::Result<impl AsyncRead + Unpin> {
    use std::os::fd::OwnedFd;
    use tokio::net::unix::pipe::Receiver;

    Receiver::from_owned_fd(OwnedFd::from(reader))
}

/// Async view of the read end of the merged output pipe. Reads run on the
/// blocking pool.
#[cfg(windows)]
fn merged_reader(reader: PipeReader) -> io::Result<impl AsyncRead + Unpin> {
    use std::os::windows::io::OwnedHandle;

    let file = std::fs::File::from(OwnedHandle::from(reader));
    Ok(tokio::fs::File::from_std(file))
}
