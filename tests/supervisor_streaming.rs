// tests/supervisor_streaming.rs
#![cfg(unix)]

mod common;
use crate::common::{init_tracing, read_log, sh, split_section, with_timeout, SEPARATOR};

use std::error::Error;

use devlaunch::errors::LaunchError;
use devlaunch::exec::stream_process;
use devlaunch::types::CommandLine;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn echo_hello_reaches_console_and_log() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("logs/dev.log");
    let mut console: Vec<u8> = Vec::new();

    let cmd = CommandLine::new("echo", ["hello"]);
    let code = with_timeout(stream_process(&cmd, dir.path(), &log_path, &mut console)).await?;

    assert_eq!(code, 0);
    assert_eq!(console, b"hello\n");

    let log = read_log(&log_path);
    assert!(log.ends_with("Process exited with code 0\n"), "log was: {log:?}");

    let (header, body, footer) = split_section(&log);
    assert!(header.starts_with(&format!("\n{SEPARATOR}\nLaunch at ")));
    assert!(header.ends_with("Command: echo hello\n\n"));
    assert_eq!(body, "hello\n");
    assert_eq!(footer, "\nProcess exited with code 0\n");
    Ok(())
}

#[tokio::test]
async fn header_timestamp_is_iso_8601() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    stream_process(&sh("true"), dir.path(), &log_path, &mut console).await?;

    let log = read_log(&log_path);
    let stamp = log
        .lines()
        .find_map(|l| l.strip_prefix("Launch at "))
        .expect("launch line");
    chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%.f")?;
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_code_is_returned_and_recorded() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    let code = stream_process(&sh("echo failing; exit 3"), dir.path(), &log_path, &mut console)
        .await?;

    assert_eq!(code, 3);
    assert_eq!(console, b"failing\n");
    assert!(read_log(&log_path).ends_with("\nProcess exited with code 3\n"));
    Ok(())
}

#[tokio::test]
async fn stderr_is_merged_into_both_sinks() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    stream_process(
        &sh("echo to-stdout; echo to-stderr 1>&2"),
        dir.path(),
        &log_path,
        &mut console,
    )
    .await?;

    assert_eq!(console, b"to-stdout\nto-stderr\n");

    let log = read_log(&log_path);
    let (_, body, _) = split_section(&log);
    assert_eq!(body.as_bytes(), console.as_slice());
    Ok(())
}

#[tokio::test]
async fn interleaved_stdout_and_stderr_keep_write_order() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let cmd = sh("echo 1; echo 2 >&2; echo 3; echo 4 >&2; echo 5");

    // Repeat: any scheduling-dependent reordering would show up here.
    for run in 0..20 {
        let log_path = dir.path().join(format!("dev-{run}.log"));
        let mut console: Vec<u8> = Vec::new();

        let code = with_timeout(stream_process(&cmd, dir.path(), &log_path, &mut console)).await?;
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(console)?,
            "1\n2\n3\n4\n5\n",
            "console order differs on run {run}"
        );

        let log = read_log(&log_path);
        let (_, body, _) = split_section(&log);
        assert_eq!(body, "1\n2\n3\n4\n5\n", "log order differs on run {run}");
    }
    Ok(())
}

#[tokio::test]
async fn lines_are_copied_unmodified() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    // Trailing whitespace, a blank line, and no newline at the very end.
    stream_process(
        &sh("printf '  padded  \\n\\nlast'"),
        dir.path(),
        &log_path,
        &mut console,
    )
    .await?;

    assert_eq!(console, b"  padded  \n\nlast");
    let log = read_log(&log_path);
    let (_, body, _) = split_section(&log);
    assert_eq!(body, "  padded  \n\nlast");
    Ok(())
}

#[tokio::test]
async fn child_runs_in_the_given_directory() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("marker.txt"), "from the root\n")?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    let cmd = CommandLine::new("cat", ["marker.txt"]);
    let code = stream_process(&cmd, dir.path(), &log_path, &mut console).await?;

    assert_eq!(code, 0);
    assert_eq!(console, b"from the root\n");
    Ok(())
}

#[tokio::test]
async fn runs_append_without_touching_earlier_content() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("nested/deeper/dev.log");
    std::fs::create_dir_all(log_path.parent().unwrap())?;
    std::fs::write(&log_path, "previous content\n")?;

    let mut console: Vec<u8> = Vec::new();
    stream_process(&sh("echo first"), dir.path(), &log_path, &mut console).await?;
    stream_process(&sh("echo second; exit 2"), dir.path(), &log_path, &mut console).await?;

    let log = read_log(&log_path);
    assert!(log.starts_with("previous content\n"));
    assert_eq!(log.matches(SEPARATOR).count(), 2);

    let sections: Vec<&str> = log
        .split(&format!("\n{SEPARATOR}\n"))
        .skip(1)
        .collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].contains("Command: sh -c echo first\n\nfirst\n\nProcess exited with code 0\n"));
    assert!(sections[1].contains("second\n\nProcess exited with code 2\n"));
    assert_eq!(console, b"first\nsecond\n");
    Ok(())
}

#[tokio::test]
async fn log_parent_directory_is_created() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("a/b/c/dev.log");
    let mut console: Vec<u8> = Vec::new();

    stream_process(&sh("true"), dir.path(), &log_path, &mut console).await?;

    assert!(log_path.is_file());
    Ok(())
}

#[tokio::test]
async fn missing_executable_is_a_spawn_error() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let log_path = dir.path().join("dev.log");
    let mut console: Vec<u8> = Vec::new();

    let cmd = CommandLine::new("devlaunch-definitely-not-a-real-program", ["--flag"]);
    let result = stream_process(&cmd, dir.path(), &log_path, &mut console).await;

    match result {
        Err(LaunchError::Spawn { command, source }) => {
            assert_eq!(command, "devlaunch-definitely-not-a-real-program --flag");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Spawn error, got {other:?}"),
    }

    // The attempt is still visible in the log, without a footer.
    let log = read_log(&log_path);
    assert!(log.contains("Command: devlaunch-definitely-not-a-real-program --flag"));
    assert!(!log.contains("Process exited with code"));
    assert!(console.is_empty());
    Ok(())
}
