// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::{WatchConfig, WatchSettings, apply_config_file, validate_settings};
use crate::engine::{ChangeEvent, CoreRuntime, Runtime};
use crate::errors::Result;
use crate::exec::ShellExecutor;
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::{CHANGE_CHANNEL_CAPACITY, ExcludeSet, spawn_watcher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the two-stage config build (flags, then config file)
/// - directory validation and exclude resolution
/// - the file watcher
/// - Ctrl-C handling
/// - the debounce runtime and the shell executor
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;

    let Some(cfg) = load_config(&fs, &args)? else {
        cli::print_usage()?;
        return Ok(());
    };

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let (change_tx, change_rx) = mpsc::channel::<ChangeEvent>(CHANGE_CHANNEL_CAPACITY);

    // Dropping the handle at the end of this function stops watching.
    let watcher = spawn_watcher(cfg.directory(), cfg.recursive(), change_tx)?;

    info!("watch directory \"{}\"", cfg.directory().display());
    info!("find command \"{}\"", cfg.command());

    let excludes = ExcludeSet::from(cfg.excludes());
    info!("exclude directories \"{}\"", excludes);

    info!("command executing delay {} seconds", cfg.delay_seconds());
    if cfg.delay_seconds() <= 0 {
        info!(
            "command executing delay is fixed to {} seconds",
            cfg.tick().as_secs()
        );
    }

    // Ctrl-C → graceful shutdown.
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {e}");
            return;
        }
        let _ = shutdown_tx.send(()).await;
    });

    let core = CoreRuntime::new(excludes, cfg.execute_at_ready());
    let runtime = Runtime::new(
        core,
        cfg.command(),
        cfg.tick(),
        change_rx,
        shutdown_rx,
        ShellExecutor::new(),
    );

    let result = runtime.run().await;
    drop(watcher);
    result
}

/// Build the effective configuration from flags and the optional config
/// file.
///
/// Returns `Ok(None)` when no command was given anywhere, in which case the
/// caller shows usage instead of watching.
pub fn load_config(fs: &dyn FileSystem, args: &CliArgs) -> Result<Option<WatchConfig>> {
    let settings = WatchSettings::from(args);
    let settings = apply_config_file(fs, settings, args.config.as_deref())?;

    if !settings.has_command() {
        debug!("no command given");
        return Ok(None);
    }

    validate_settings(fs, settings).map(Some)
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &WatchConfig) {
    println!("gwatch dry-run");
    println!("  dir: {}", cfg.directory().display());
    println!("  recursive: {}", cfg.recursive());
    println!("  command: {}", cfg.command());
    println!("  execute_at_ready: {}", cfg.execute_at_ready());
    println!(
        "  delay: {}s (effective {}s)",
        cfg.delay_seconds(),
        cfg.tick().as_secs()
    );

    if cfg.excludes().is_empty() {
        println!("  excludes: (none)");
    } else {
        println!("  excludes:");
        for exclude in cfg.excludes() {
            println!("    - {}", exclude.display());
        }
    }

    debug!("dry-run complete (no watching)");
}
