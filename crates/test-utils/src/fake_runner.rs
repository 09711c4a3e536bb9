use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use devlaunch::errors::LaunchError;
use devlaunch::exec::CommandRunner;
use devlaunch::exec::backend::RunFuture;
use devlaunch::types::CommandLine;

/// One call the launcher made on the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Inherited {
        command: CommandLine,
        cwd: PathBuf,
    },
    Supervised {
        command: CommandLine,
        cwd: PathBuf,
        log_path: PathBuf,
    },
}

/// What a scripted command does when "run".
#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    Exit(i32),
    /// Behave like a missing executable.
    NotFound,
}

/// A fake runner that:
/// - records every invocation, in order
/// - spawns nothing and resolves to scripted exit codes.
#[derive(Debug, Clone)]
pub struct FakeRunner {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    install: Scripted,
    dev: Scripted,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            install: Scripted::Exit(0),
            dev: Scripted::Exit(0),
        }
    }

    pub fn with_install(mut self, outcome: Scripted) -> Self {
        self.install = outcome;
        self
    }

    pub fn with_dev(mut self, outcome: Scripted) -> Self {
        self.dev = outcome;
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn inherited_count(&self) -> usize {
        self.invocations()
            .iter()
            .filter(|i| matches!(i, Invocation::Inherited { .. }))
            .count()
    }

    pub fn supervised_count(&self) -> usize {
        self.invocations()
            .iter()
            .filter(|i| matches!(i, Invocation::Supervised { .. }))
            .count()
    }

    fn record(&self, invocation: Invocation) {
        self.invocations.lock().unwrap().push(invocation);
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(outcome: Scripted, command: &CommandLine) -> devlaunch::errors::Result<i32> {
    match outcome {
        Scripted::Exit(code) => Ok(code),
        Scripted::NotFound => Err(LaunchError::Spawn {
            command: command.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
        }),
    }
}

impl CommandRunner for FakeRunner {
    fn run_inherited<'a>(&'a mut self, command: &'a CommandLine, cwd: &'a Path) -> RunFuture<'a> {
        self.record(Invocation::Inherited {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
        });
        let outcome = self.install;
        Box::pin(async move { resolve(outcome, command) })
    }

    fn run_supervised<'a>(
        &'a mut self,
        command: &'a CommandLine,
        cwd: &'a Path,
        log_path: &'a Path,
    ) -> RunFuture<'a> {
        self.record(Invocation::Supervised {
            command: command.clone(),
            cwd: cwd.to_path_buf(),
            log_path: log_path.to_path_buf(),
        });
        let outcome = self.dev;
        Box::pin(async move { resolve(outcome, command) })
    }
}
