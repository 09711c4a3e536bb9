// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`supervisor`] runs the dev server, teeing its merged output to the
//!   console and the launch log.
//! - [`log_file`] owns the append-only log and its header/footer framing.
//! - [`inherited`] runs a command with the launcher's own stdio (used for the
//!   dependency install).
//! - [`backend`] provides the `CommandRunner` seam the launcher talks to, and
//!   the production `RealCommandRunner`. Tests swap in a fake.

pub mod backend;
pub mod inherited;
pub mod log_file;
pub mod supervisor;

use std::process::ExitStatus;

pub use backend::{CommandRunner, RealCommandRunner};
pub use log_file::LaunchLog;
pub use supervisor::stream_process;

/// Exit code of a finished child.
///
/// A child killed by a signal has no code; report it as the negated signal
/// number on Unix and `-1` elsewhere.
pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
