//! Platform-specific configuration paths.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/naturid/`
/// - macOS: `~/Library/Application Support/naturid/`
/// - Windows: `%APPDATA%\naturid\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
