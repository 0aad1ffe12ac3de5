#![allow(dead_code)]

use std::path::PathBuf;

use gwatch::config::WatchConfig;

/// Builder for `WatchConfig` to simplify test setup.
///
/// Skips all filesystem checks; the directory need not exist.
pub struct WatchConfigBuilder {
    directory: PathBuf,
    recursive: bool,
    excludes: Vec<PathBuf>,
    command: String,
    execute_at_ready: bool,
    delay_seconds: i64,
}

impl WatchConfigBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            directory: PathBuf::from("/project"),
            recursive: false,
            excludes: Vec::new(),
            command: command.to_string(),
            execute_at_ready: false,
            delay_seconds: 0,
        }
    }

    pub fn directory(mut self, dir: &str) -> Self {
        self.directory = PathBuf::from(dir);
        self
    }

    pub fn recursive(mut self, val: bool) -> Self {
        self.recursive = val;
        self
    }

    pub fn exclude(mut self, path: &str) -> Self {
        self.excludes.push(PathBuf::from(path));
        self
    }

    pub fn execute_at_ready(mut self, val: bool) -> Self {
        self.execute_at_ready = val;
        self
    }

    pub fn delay(mut self, seconds: i64) -> Self {
        self.delay_seconds = seconds;
        self
    }

    pub fn build(self) -> WatchConfig {
        WatchConfig::new_unchecked(
            self.directory,
            self.recursive,
            self.excludes,
            self.command,
            self.execute_at_ready,
            self.delay_seconds,
        )
    }
}
