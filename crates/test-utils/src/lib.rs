//! Shared helpers for gwatch's integration tests.

pub mod builders;
pub mod fake_executor;

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;

use tempfile::TempDir;
use tracing_subscriber::{EnvFilter, fmt};

use gwatch::logging::{LOG_ENV_VAR, filter_directives};

/// Upper bound for any single awaited step in a test.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Install a per-test-captured subscriber once per test binary.
///
/// Honours `GWATCH_LOG` like the binary does, then `RUST_LOG`, and falls
/// back to `info` with `notify` held at `warn`. Output only shows for
/// failing tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(tracing::Level::INFO)));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, panicking after [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(TEST_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("test step timed out after {TEST_TIMEOUT:?}"))
}

/// A temporary directory together with its canonical path.
///
/// gwatch canonicalizes the watch root and the excludes, and the temp root
/// itself may sit behind a symlink (`/tmp` on macOS), so tests compare
/// against the canonical form.
pub fn canonical_tempdir() -> io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().canonicalize()?;
    Ok((dir, root))
}
