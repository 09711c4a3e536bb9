// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The launcher flow talks to a `CommandRunner` instead of spawning processes
//! directly, so tests can check which commands would run (and script their
//! exit codes) without touching a real package manager.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::CommandLine;

use super::inherited::run_inherited;
use super::supervisor::stream_process;

pub type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>>;

/// How the launcher runs its two external commands.
pub trait CommandRunner: Send {
    /// Run to completion with inherited stdio; resolves to the exit code.
    fn run_inherited<'a>(&'a mut self, command: &'a CommandLine, cwd: &'a Path) -> RunFuture<'a>;

    /// Run under supervision, teeing output to the console and `log_path`;
    /// resolves to the exit code.
    fn run_supervised<'a>(
        &'a mut self,
        command: &'a CommandLine,
        cwd: &'a Path,
        log_path: &'a Path,
    ) -> RunFuture<'a>;
}

/// Production runner: real processes, console = the launcher's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_inherited<'a>(&'a mut self, command: &'a CommandLine, cwd: &'a Path) -> RunFuture<'a> {
        Box::pin(run_inherited(command, cwd))
    }

    fn run_supervised<'a>(
        &'a mut self,
        command: &'a CommandLine,
        cwd: &'a Path,
        log_path: &'a Path,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stream_process(command, cwd, log_path, &mut stdout).await
        })
    }
}
