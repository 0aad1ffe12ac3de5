// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::types::effective_delay;

/// Configuration as read from a TOML file.
///
/// ```toml
/// Dir = "./src"
/// Excludes = ["./src/target", "./src/.git"]
/// Recursive = true
/// Command = "make test"
/// execute_at_ready = true
/// Delay = 3
/// ```
///
/// Every key is optional. A key that is present overrides the matching
/// command-line flag; an absent key leaves the flag value alone. Lower-case
/// spellings of the capitalised keys are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawConfigFile {
    #[serde(rename = "Dir", alias = "dir")]
    pub dir: Option<PathBuf>,

    #[serde(rename = "Excludes", alias = "excludes")]
    pub excludes: Option<Vec<PathBuf>>,

    #[serde(rename = "Recursive", alias = "recursive")]
    pub recursive: Option<bool>,

    #[serde(rename = "Command", alias = "command")]
    pub command: Option<String>,

    #[serde(rename = "execute_at_ready", alias = "ExecuteAtReady")]
    pub execute_at_ready: Option<bool>,

    #[serde(rename = "Delay", alias = "delay")]
    pub delay: Option<i64>,
}

/// Unvalidated settings, first populated from flags and then overridden by
/// the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSettings {
    /// `None` (or empty) means the current directory.
    pub dir: Option<PathBuf>,
    pub excludes: Vec<PathBuf>,
    pub recursive: bool,
    pub command: String,
    pub execute_at_ready: bool,
    pub delay: i64,
}

impl WatchSettings {
    /// Apply file values on top of `self`, field by field.
    ///
    /// A present `Excludes` list replaces the flag list entirely.
    pub fn merge(mut self, file: RawConfigFile) -> Self {
        if let Some(dir) = file.dir {
            self.dir = Some(dir);
        }
        if let Some(excludes) = file.excludes {
            self.excludes = excludes;
        }
        if let Some(recursive) = file.recursive {
            self.recursive = recursive;
        }
        if let Some(command) = file.command {
            self.command = command;
        }
        if let Some(execute_at_ready) = file.execute_at_ready {
            self.execute_at_ready = execute_at_ready;
        }
        if let Some(delay) = file.delay {
            self.delay = delay;
        }
        self
    }

    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}

/// Validated, immutable configuration consumed by the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    directory: PathBuf,
    recursive: bool,
    excludes: Vec<PathBuf>,
    command: String,
    execute_at_ready: bool,
    delay_seconds: i64,
}

impl WatchConfig {
    /// Build a config without any filesystem checks.
    ///
    /// Used by [`validate_settings`](crate::config::validate_settings) once
    /// the directory has been checked, and by tests.
    pub fn new_unchecked(
        directory: PathBuf,
        recursive: bool,
        excludes: Vec<PathBuf>,
        command: String,
        execute_at_ready: bool,
        delay_seconds: i64,
    ) -> Self {
        Self {
            directory,
            recursive,
            excludes,
            command,
            execute_at_ready,
            delay_seconds,
        }
    }

    /// Absolute path of the watched directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Absolute exclude prefixes, in the order given.
    pub fn excludes(&self) -> &[PathBuf] {
        &self.excludes
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn execute_at_ready(&self) -> bool {
        self.execute_at_ready
    }

    /// Delay exactly as configured (may be zero or negative).
    pub fn delay_seconds(&self) -> i64 {
        self.delay_seconds
    }

    /// Tick interval actually used by the runtime.
    pub fn tick(&self) -> Duration {
        effective_delay(self.delay_seconds)
    }
}
