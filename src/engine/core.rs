// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`EngineEvent`]s and produces:
//! - an updated debounce state
//! - a list of commands describing what the IO shell should do next
//!
//! The async/IO-heavy shell (`engine::runtime::Runtime`) is responsible for:
//! - reading change events and the shutdown signal from channels
//! - driving the periodic ticker
//! - running the command through the executor
//!
//! The core is intended to be extensively unit tested without any Tokio,
//! channels, filesystem, or processes.

use crate::engine::event_handlers::{
    handle_change, handle_execution_succeeded, handle_tick, CoreStep,
};
use crate::engine::{EngineEvent, ExecuteReason};
use crate::types::DebounceState;
use crate::watch::ExcludeSet;

/// Pure core runtime state.
///
/// This owns:
/// - the exclude prefixes
/// - the `Clean`/`Dirty` debounce state
/// - whether to run once at startup
///
/// It has **no** channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct CoreRuntime {
    excludes: ExcludeSet,
    state: DebounceState,
    execute_at_ready: bool,
}

impl CoreRuntime {
    pub fn new(excludes: ExcludeSet, execute_at_ready: bool) -> Self {
        Self {
            excludes,
            state: DebounceState::Clean,
            execute_at_ready,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn excludes(&self) -> &ExcludeSet {
        &self.excludes
    }

    /// Commands to run before the event loop starts.
    ///
    /// With `execute_at_ready` this is a single execution regardless of
    /// whether anything has changed yet.
    pub fn startup(&self) -> CoreStep {
        if self.execute_at_ready {
            CoreStep::execute(ExecuteReason::Startup)
        } else {
            CoreStep::idle()
        }
    }

    /// Handle a single event, updating state and returning the resulting
    /// commands for the IO shell.
    pub fn step(&mut self, event: EngineEvent) -> CoreStep {
        match event {
            EngineEvent::Changed(change) => handle_change(&mut self.state, &self.excludes, change),
            EngineEvent::Tick => handle_tick(&self.state),
            EngineEvent::ExecutionSucceeded => handle_execution_succeeded(&mut self.state),
            EngineEvent::ShutdownRequested => CoreStep::stop(),
        }
    }
}
