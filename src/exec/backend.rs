// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The runtime talks to an `ExecutorBackend` instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation in [`command`](super::command).
//!
//! - `ShellExecutor` is the default implementation used by `gwatch`. It runs
//!   the command on a blocking thread and prints the framed output.
//! - Tests can provide their own `ExecutorBackend` that, for example, records
//!   which commands were run and returns a canned outcome.

use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;

use tracing::warn;

use super::command::{run_captured, write_framed, ExecError};

/// Trait abstracting how the configured command is executed.
///
/// The runtime awaits the returned future before servicing any other event,
/// so there is never more than one execution in flight.
pub trait ExecutorBackend: Send {
    fn execute<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ExecError>> + Send + 'a>>;
}

/// Real executor backend used in production.
///
/// Output of successful runs is written to `out` (stdout by default).
pub struct ShellExecutor<W = io::Stdout> {
    out: W,
}

impl ShellExecutor<io::Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ShellExecutor<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ShellExecutor<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ExecutorBackend for ShellExecutor<W> {
    fn execute<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ExecError>> + Send + 'a>> {
        Box::pin(async move {
            let owned = command.to_string();
            let output = tokio::task::spawn_blocking(move || run_captured(&owned))
                .await
                .map_err(|err| ExecError::Aborted {
                    command: command.to_string(),
                    reason: err.to_string(),
                })??;

            // Printing is best-effort once the command has succeeded.
            if let Err(err) = write_framed(&mut self.out, &output) {
                warn!(error = %err, "failed to print command output");
            }
            Ok(())
        })
    }
}
