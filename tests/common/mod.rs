#![allow(dead_code)]

use std::path::Path;

use devlaunch::types::CommandLine;

pub use devlaunch_test_utils::{init_tracing, with_timeout};

pub const SEPARATOR: &str = "================================================================================";

/// `sh -c <script>`.
pub fn sh(script: &str) -> CommandLine {
    CommandLine::new("sh", ["-c", script])
}

pub fn read_log(path: &Path) -> String {
    std::fs::read_to_string(path).expect("log file should exist")
}

/// Split one framed section into (header, body, footer).
///
/// The header runs up to and including the blank line after `Command:`; the
/// footer is the trailing `\nProcess exited with code N\n`.
pub fn split_section(section: &str) -> (&str, &str, &str) {
    let header_end = section
        .find("\n\n")
        .map(|i| i + 2)
        .expect("header terminator");
    let footer_start = section
        .rfind("\nProcess exited with code ")
        .expect("footer");
    (
        &section[..header_end],
        &section[header_end..footer_start],
        &section[footer_start..],
    )
}
