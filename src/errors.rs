// src/errors.rs

//! Crate-wide error type and the mapping from errors to process exit codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::exec::ExecError;

/// Exit code for a missing directory, a failed stat or a bad config file.
pub const EXIT_INVALID_DIR: i32 = 10;
/// Exit code when the watch target exists but is not a directory.
pub const EXIT_NOT_A_DIR: i32 = 11;
/// Exit code when the watch directory cannot be made absolute.
pub const EXIT_ABSOLUTIZE: i32 = 12;
/// Exit code when the command fails.
pub const EXIT_COMMAND_FAILED: i32 = 13;

#[derive(Error, Debug)]
pub enum GwatchError {
    #[error("directory \"{}\" does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("cannot stat directory \"{}\": {source}", path.display())]
    DirectoryStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid directory \"{}\"", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot resolve absolute path of \"{}\": {source}", path.display())]
    Absolutize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("file watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("command execution failed: {0}")]
    CommandFailed(#[from] ExecError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GwatchError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GwatchError::DirectoryNotFound(_)
            | GwatchError::DirectoryStat { .. }
            | GwatchError::ConfigError(_)
            | GwatchError::TomlError(_) => EXIT_INVALID_DIR,
            GwatchError::NotADirectory(_) => EXIT_NOT_A_DIR,
            GwatchError::Absolutize { .. } => EXIT_ABSOLUTIZE,
            GwatchError::CommandFailed(_) => EXIT_COMMAND_FAILED,
            GwatchError::Watch(_) | GwatchError::IoError(_) | GwatchError::Other(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GwatchError>;
