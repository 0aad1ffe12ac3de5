// src/watch/path_utils.rs

//! Utility functions for path handling in the watcher.

use std::path::PathBuf;

use tracing::debug;

use crate::fs::FileSystem;

/// Resolve user-supplied exclude paths to absolute form.
///
/// Each entry is replaced, in order of preference, by:
/// - its canonical form (absolute, symlinks resolved) if the path exists,
/// - its lexical absolute form otherwise,
/// - itself if neither step succeeds.
///
/// Never fails; the output has the same length and order as the input.
pub fn resolve_paths<I, P>(fs: &dyn FileSystem, paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|p| resolve_path(fs, p.into()))
        .collect()
}

fn resolve_path(fs: &dyn FileSystem, path: PathBuf) -> PathBuf {
    match fs.canonicalize(&path) {
        Ok(real) => return real,
        Err(err) => debug!(path = %path.display(), error = %err, "cannot resolve symlinks"),
    }

    match fs.absolute(&path) {
        Ok(abs) => abs,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "cannot absolutize; keeping as given");
            path
        }
    }
}
