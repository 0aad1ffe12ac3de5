// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Resolving exclude paths to absolute form once at startup.
//! - Matching changed paths against the exclude prefixes.
//! - Wiring up the filesystem watcher (`notify`) and turning its callbacks
//!   into [`ChangeEvent`](crate::engine::ChangeEvent)s on a bounded channel.
//!
//! It does **not** decide when the command runs; that is the engine's job.

pub mod exclude;
pub mod path_utils;
pub mod watcher;

pub use exclude::ExcludeSet;
pub use path_utils::resolve_paths;
pub use watcher::{CHANGE_CHANNEL_CAPACITY, WatcherHandle, is_change_kind, spawn_watcher};
