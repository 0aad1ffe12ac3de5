// src/engine/runtime.rs

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::types::MAX_DELAY_SECS;

use super::core::CoreRuntime;
use super::{ChangeEvent, CoreCommand, EngineEvent, ExecuteReason};

/// Drives the debounce core in response to change events, ticks and the
/// shutdown signal, and delegates command execution to an
/// `ExecutorBackend`.
///
/// This is a pure IO shell around `CoreRuntime`, which contains all the
/// debounce semantics. One loop iteration services exactly one source, and
/// a command execution is awaited inside the loop, so executions never
/// overlap.
pub struct Runtime<E: ExecutorBackend> {
    core: CoreRuntime,
    command: String,
    tick: Duration,
    change_rx: mpsc::Receiver<ChangeEvent>,
    shutdown_rx: mpsc::Receiver<()>,
    executor: E,
}

impl<E: ExecutorBackend> fmt::Debug for Runtime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("command", &self.command)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend> Runtime<E> {
    pub fn new(
        core: CoreRuntime,
        command: impl Into<String>,
        tick: Duration,
        change_rx: mpsc::Receiver<ChangeEvent>,
        shutdown_rx: mpsc::Receiver<()>,
        executor: E,
    ) -> Self {
        Self {
            core,
            command: command.into(),
            tick,
            change_rx,
            shutdown_rx,
            executor,
        }
    }

    /// Main event loop.
    ///
    /// - Runs the startup execution if the core asks for one.
    /// - Multiplexes change events, the shutdown signal and the ticker.
    /// - Feeds each event into the core and executes the returned commands.
    ///
    /// Returns `Ok(())` on shutdown and `Err(GwatchError::CommandFailed)` as
    /// soon as an execution fails; there is no retry.
    pub async fn run(mut self) -> Result<()> {
        info!(tick = ?self.tick, "gwatch runtime started");

        let startup = self.core.startup();
        for command in startup.commands {
            self.execute_command(command).await?;
        }

        // First tick one full period from now, not immediately.
        let now = Instant::now();
        let start = now
            .checked_add(self.tick)
            .unwrap_or_else(|| now + Duration::from_secs(MAX_DELAY_SECS));
        let mut ticker = time::interval_at(start, self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // A closed channel disables its branch; the ticker never closes.
            let event = tokio::select! {
                Some(()) = self.shutdown_rx.recv() => EngineEvent::ShutdownRequested,
                Some(change) = self.change_rx.recv() => EngineEvent::Changed(change),
                _ = ticker.tick() => EngineEvent::Tick,
            };

            if !matches!(event, EngineEvent::Changed(_)) {
                debug!(?event, "runtime received event");
            }

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("shutdown requested; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Execute a single command from the core.
    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Execute(reason) => {
                match reason {
                    ExecuteReason::Startup => {
                        info!("gwatch is ready, execute the command")
                    }
                    ExecuteReason::Tick => {
                        debug!(command = %self.command, "changes pending; executing command")
                    }
                }

                if let Err(err) = self.executor.execute(&self.command).await {
                    error!(command = %self.command, error = %err, "command failed");
                    return Err(err.into());
                }

                let step = self.core.step(EngineEvent::ExecutionSucceeded);
                debug_assert!(step.commands.is_empty());
            }
        }
        Ok(())
    }
}
