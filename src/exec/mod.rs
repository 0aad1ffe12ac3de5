// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] runs `sh -c <command>` synchronously, capturing stdout and
//!   stderr into one buffer, and frames that buffer with separator lines.
//! - [`backend`] provides the `ExecutorBackend` trait and the concrete
//!   `ShellExecutor` that the runtime uses in production, and which tests
//!   can replace with a fake implementation.

pub mod backend;
pub mod command;

pub use backend::{ExecutorBackend, ShellExecutor};
pub use command::{run_captured, write_framed, ExecError, SEPARATOR_WIDTH};
