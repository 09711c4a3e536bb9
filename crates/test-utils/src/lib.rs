//! Shared helpers for the `devlaunch` integration tests.
//!
//! - [`builders`]: `ConfigFileBuilder` for projects with a custom package
//!   manager or paths.
//! - [`fake_runner`]: a `CommandRunner` that records which commands the
//!   launcher would run and returns scripted exit codes.

pub mod builders;
pub mod fake_runner;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Upper bound for one launch in tests. Real child processes here are `sh`
/// one-liners, so hitting it means the output pipe never reached EOF.
pub const LAUNCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Route launcher diagnostics into the test harness's captured output.
///
/// Idempotent. Filter with `RUST_LOG` (default `info`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, panicking after [`LAUNCH_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(LAUNCH_TIMEOUT, f)
        .await
        .expect("launch did not finish within LAUNCH_TIMEOUT")
}
