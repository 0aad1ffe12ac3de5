// src/config/mod.rs

//! Configuration loading and validation for gwatch.
//!
//! The configuration is built in two stages:
//! 1. Command-line flags become a [`WatchSettings`] value.
//! 2. The TOML file (`-c <path>` or `./gwatch.toml`) is applied on top,
//!    key by key ([`loader`]).
//!
//! The merged settings are then checked and frozen into a [`WatchConfig`]
//! ([`validate`]).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{apply_config_file, load_from_path, resolve_config_path, DEFAULT_CONFIG_FILE};
pub use model::{RawConfigFile, WatchConfig, WatchSettings};
pub use validate::validate_settings;
