// src/config/validate.rs

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::config::model::{WatchConfig, WatchSettings};
use crate::errors::{GwatchError, Result};
use crate::fs::{EntryKind, FileSystem};
use crate::watch::resolve_paths;

const DEFAULT_DIR: &str = "./";

/// Turn merged settings into an immutable [`WatchConfig`].
///
/// - The watch directory defaults to `./`, must exist and must be a
///   directory; it is then canonicalized, falling back to its lexical
///   absolute form.
/// - Exclude paths are resolved best-effort and never cause an error.
pub fn validate_settings(fs: &dyn FileSystem, settings: WatchSettings) -> Result<WatchConfig> {
    let dir = settings
        .dir
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));

    match fs.stat(&dir) {
        Ok(EntryKind::Dir) => {}
        Ok(EntryKind::File) => return Err(GwatchError::NotADirectory(dir)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(GwatchError::DirectoryNotFound(dir));
        }
        Err(source) => return Err(GwatchError::DirectoryStat { path: dir, source }),
    }

    // Event paths are reported under this root; it must be in the same
    // (canonical) namespace as the excludes.
    let directory = match fs.canonicalize(&dir) {
        Ok(real) => real,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "cannot resolve symlinks of watch directory");
            fs.absolute(&dir)
                .map_err(|source| GwatchError::Absolutize { path: dir, source })?
        }
    };

    let excludes = resolve_paths(fs, settings.excludes);

    Ok(WatchConfig::new_unchecked(
        directory,
        settings.recursive,
        excludes,
        settings.command,
        settings.execute_at_ready,
        settings.delay,
    ))
}
