use std::fmt;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

/// An executable name followed by its ordered arguments.
///
/// Arguments are passed to the OS verbatim; no shell parsing happens on Unix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a `tokio::process::Command` rooted at `cwd`.
    ///
    /// Package managers ship as `.cmd` shims on Windows, which `CreateProcess`
    /// will not resolve on its own, so we go through `cmd /C` there.
    pub fn to_command(&self, cwd: &Path) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.program).args(&self.args);
            c
        } else {
            let mut c = Command::new(&self.program);
            c.args(&self.args);
            c
        };
        cmd.current_dir(cwd).stdin(Stdio::inherit());
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What the dependency check ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The marker directory was present; nothing was run.
    AlreadyInstalled,
    /// The install command ran and exited with code 0.
    Installed,
}
