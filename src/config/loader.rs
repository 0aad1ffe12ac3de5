// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{RawConfigFile, WatchSettings};
use crate::errors::{GwatchError, Result};
use crate::fs::FileSystem;

/// Config file picked up from the working directory when `-c` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gwatch.toml";

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; directory checks happen in
/// [`validate_settings`](crate::config::validate_settings).
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs
        .read_to_string(path)
        .map_err(|err| GwatchError::ConfigError(format!("{err:#}")))?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Decide which config file to read, if any.
///
/// - An explicit, non-empty path is always used (and must be readable).
/// - Otherwise `gwatch.toml` in the working directory is used if it exists.
pub fn resolve_config_path(fs: &dyn FileSystem, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => Some(path.to_path_buf()),
        _ => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            fs.exists(&default).then_some(default)
        }
    }
}

/// Second stage of the settings build: apply the config file (if any) on
/// top of the settings parsed from flags.
pub fn apply_config_file(
    fs: &dyn FileSystem,
    settings: WatchSettings,
    explicit: Option<&Path>,
) -> Result<WatchSettings> {
    let Some(path) = resolve_config_path(fs, explicit) else {
        debug!("no config file; using command-line flags only");
        return Ok(settings);
    };

    let file = load_from_path(fs, &path)?;
    info!(path = %path.display(), "loaded config file");
    Ok(settings.merge(file))
}
