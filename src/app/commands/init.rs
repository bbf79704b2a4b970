//! Init command: write a default `tsmake.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};

/// Execute the init command.
///
/// Writes the commented default configuration into `root` and returns its
/// path. Refuses to overwrite an existing configuration.
pub fn execute(root: &Path) -> Result<PathBuf, AppError> {
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(AppError::ConfigExists);
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;

    Ok(config_path)
}
