// src/exec/log_file.rs

//! Append-only launch log.
//!
//! Each supervised run is framed as:
//!
//! ```text
//!
//! ================================================================================
//! Launch at 2025-01-31T09:15:02.123456
//! Command: npm run dev -- --host 0.0.0.0
//!
//! <raw child output>
//!
//! Process exited with code 0
//! ```
//!
//! Every write is followed by a flush so the file is current up to the last
//! line if the launcher itself dies.

use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Timelike};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::errors::Result;
use crate::types::CommandLine;

pub const SEPARATOR_WIDTH: usize = 80;

#[derive(Debug)]
pub struct LaunchLog {
    path: PathBuf,
    file: File,
}

impl LaunchLog {
    /// Open `path` for appending, creating it and its parent directory if
    /// needed. Existing content is never truncated.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write_header(&mut self, command: &CommandLine) -> Result<()> {
        let header = format!(
            "\n{}\nLaunch at {}\nCommand: {}\n\n",
            separator(),
            iso_timestamp(),
            command
        );
        self.append(header.as_bytes()).await
    }

    /// Append one line of child output exactly as received.
    pub async fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.append(line).await
    }

    pub async fn write_footer(&mut self, exit_code: i32) -> Result<()> {
        let footer = format!("\nProcess exited with code {exit_code}\n");
        self.append(footer.as_bytes()).await
    }

    /// Append a framed message that is not tied to a child process run.
    pub async fn write_note(&mut self, message: &str) -> Result<()> {
        let note = format!(
            "\n{}\nLauncher note at {}\n{}\n",
            separator(),
            iso_timestamp(),
            message
        );
        self.append(note.as_bytes()).await
    }

    async fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.write_all(bytes).await?;
        self.file.flush().await?;
        Ok(())
    }
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Local time, ISO-8601 without offset.
pub fn iso_timestamp() -> String {
    format_iso_timestamp(chrono::Local::now().naive_local())
}

/// `YYYY-MM-DDTHH:MM:SS`, plus `.ffffff` microseconds when they are non-zero.
pub fn format_iso_timestamp(ts: NaiveDateTime) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
