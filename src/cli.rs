// src/cli.rs

//! CLI argument parsing using `clap`.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::WatchSettings;

/// Command-line arguments for `gwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gwatch",
    version,
    about = "Watch files changing and execute the specified command.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch (default: current directory).
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Exclude a directory or file. Repeatable.
    ///
    /// Any changed path that starts with the resolved exclude path is ignored.
    #[arg(short = 'e', long = "exclude", value_name = "PATH")]
    pub excludes: Vec<PathBuf>,

    /// Recursively watch subdirectories.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Execute the command immediately once gwatch is ready.
    #[arg(short = 'i', long = "init")]
    pub execute_at_ready: bool,

    /// Seconds between checks for pending changes (<= 0 means 2).
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub delay: Option<i64>,

    /// Path to the config file (TOML).
    ///
    /// Default: `gwatch.toml` in the current working directory, if present.
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the effective configuration, but don't watch.
    #[arg(long)]
    pub dry_run: bool,

    /// Shell command to execute.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&CliArgs> for WatchSettings {
    fn from(args: &CliArgs) -> Self {
        WatchSettings {
            dir: args.dir.clone(),
            excludes: args.excludes.clone(),
            recursive: args.recursive,
            command: args.command.clone().unwrap_or_default(),
            execute_at_ready: args.execute_at_ready,
            delay: args.delay.unwrap_or(0),
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Print the usage/help text to stdout.
pub fn print_usage() -> io::Result<()> {
    CliArgs::command().print_help()
}
