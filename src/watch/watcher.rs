// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::engine::ChangeEvent;
use crate::errors::Result;

/// Capacity of the change-event channel between the notify thread and the
/// runtime loop. When full, the notify thread blocks until the loop drains it.
pub const CHANGE_CHANNEL_CAPACITY: usize = 1000;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    root: PathBuf,
    _inner: RecommendedWatcher,
}

impl WatcherHandle {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        debug!(root = %self.root.display(), "file watcher stopped");
    }
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Start watching `root` and forward every changed path as a
/// [`ChangeEvent`] into `change_tx`.
///
/// - `recursive` selects whether subdirectories are watched as well.
/// - `change_tx` should be bounded (see [`CHANGE_CHANNEL_CAPACITY`]); the
///   notify callback uses a blocking send, so a full channel back-pressures
///   the notify thread instead of dropping events.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    recursive: bool,
    change_tx: mpsc::Sender<ChangeEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();

    // Closure called synchronously on notify's own thread.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => forward_event(event, &change_tx),
            Err(err) => warn!(error = %err, "file watch error"),
        },
        Config::default(),
    )?;

    let mode = if recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };
    watcher.watch(&root, mode)?;

    info!(root = %root.display(), recursive, "file watcher started");

    Ok(WatcherHandle {
        root,
        _inner: watcher,
    })
}

/// Whether an event kind counts as a change (create, write, rename, remove).
///
/// Pure access notifications are ignored.
pub fn is_change_kind(kind: &EventKind) -> bool {
    !matches!(kind, EventKind::Access(_))
}

fn forward_event(event: Event, change_tx: &mpsc::Sender<ChangeEvent>) {
    if !is_change_kind(&event.kind) {
        trace!(?event, "ignoring access event");
        return;
    }

    for path in event.paths {
        if change_tx.blocking_send(ChangeEvent { path }).is_err() {
            // Runtime loop is gone; nothing left to notify.
            debug!("change channel closed; dropping event");
            return;
        }
    }
}
