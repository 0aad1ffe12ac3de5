// src/engine/mod.rs

//! Debounce engine for gwatch.
//!
//! The engine sits between a high-frequency stream of filesystem change
//! events and the low-frequency side effect of running the configured
//! command. It reacts to:
//! - change events from the watcher,
//! - a fixed-interval tick,
//! - the shutdown signal (Ctrl-C).
//!
//! The pure state machine lives in [`core`]; the async/IO shell that owns
//! the channels, the ticker and the executor is implemented in [`runtime`].

use std::path::PathBuf;

/// A single changed path reported by the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Why the command is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteReason {
    /// `execute_at_ready`: once, before the event loop starts.
    Startup,
    /// A tick found unprocessed changes.
    Tick,
}

/// Events flowing into the core state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The watcher reported a changed path.
    Changed(ChangeEvent),
    /// The periodic ticker fired.
    Tick,
    /// The command requested by the last `Execute` ran successfully.
    ExecutionSucceeded,
    /// Ctrl-C (or an equivalent shutdown request) was received.
    ShutdownRequested,
}

pub mod core;
pub mod event_handlers;
pub mod runtime;

pub use core::CoreRuntime;
pub use event_handlers::{CoreCommand, CoreStep};
pub use runtime::Runtime;
pub use crate::types::DebounceState;
