// src/logging.rs

//! `tracing` setup for gwatch.
//!
//! The level comes from `--log-level`, else from `GWATCH_LOG`, else `info`.
//! Everything goes to stderr; stdout is reserved for framed command output.
//! The `notify` backend is held at `warn` or quieter so a `debug` session
//! shows gwatch's own decisions rather than inotify chatter.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV_VAR: &str = "GWATCH_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(cli_level, std::env::var(LOG_ENV_VAR).ok().as_deref());
    let filter = EnvFilter::try_new(filter_directives(level))
        .context("building log filter")?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level from the CLI flag and the raw env value.
///
/// An unrecognised env value is ignored rather than rejected.
pub fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Level {
    match cli_level {
        Some(lvl) => lvl.into(),
        None => env_value.and_then(parse_level).unwrap_or(Level::INFO),
    }
}

/// Filter directives for `level`, e.g. `debug,notify=warn`.
pub fn filter_directives(level: Level) -> String {
    let notify_level = level.min(Level::WARN);
    format!(
        "{},notify={}",
        level.as_str().to_ascii_lowercase(),
        notify_level.as_str().to_ascii_lowercase()
    )
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(Level::WARN),
        other => other.parse().ok(),
    }
}
