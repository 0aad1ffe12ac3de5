// src/engine/event_handlers.rs

//! Event handling logic for the core runtime.

use tracing::{debug, info};

use crate::engine::{ChangeEvent, ExecuteReason};
use crate::types::DebounceState;
use crate::watch::ExcludeSet;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreCommand {
    /// Run the configured command now and report back with
    /// `EngineEvent::ExecutionSucceeded` if it succeeds.
    Execute(ExecuteReason),
}

/// Decision returned by the core after handling a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStep {
    /// Commands the IO shell should execute, in order.
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    pub fn idle() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: true,
        }
    }

    pub fn execute(reason: ExecuteReason) -> Self {
        Self {
            commands: vec![CoreCommand::Execute(reason)],
            keep_running: true,
        }
    }

    pub fn stop() -> Self {
        Self {
            commands: Vec::new(),
            keep_running: false,
        }
    }
}

/// Handle a change event.
///
/// A path that matches no exclude prefix marks the state dirty; repeated
/// changes before the next tick coalesce into that single dirty flag.
pub fn handle_change(
    state: &mut DebounceState,
    excludes: &ExcludeSet,
    event: ChangeEvent,
) -> CoreStep {
    if excludes.is_excluded(&event.path) {
        debug!(path = %event.path.display(), "change in excluded path ignored");
        return CoreStep::idle();
    }

    info!("\"{}\" changed", event.path.display());
    *state = DebounceState::Dirty;
    CoreStep::idle()
}

/// Handle a tick: execute only if something changed since the last run.
///
/// The state stays dirty until the shell reports success.
pub fn handle_tick(state: &DebounceState) -> CoreStep {
    if state.is_dirty() {
        CoreStep::execute(ExecuteReason::Tick)
    } else {
        CoreStep::idle()
    }
}

pub fn handle_execution_succeeded(state: &mut DebounceState) -> CoreStep {
    *state = DebounceState::Clean;
    CoreStep::idle()
}
