//! Clean command: remove the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildConfig};

/// Result of a clean execution.
#[derive(Debug)]
pub struct CleanOutcome {
    /// Path of the output directory.
    pub output_dir: PathBuf,
    /// Whether anything existed to remove.
    pub removed: bool,
}

/// Execute the clean command.
///
/// Removing an already-absent output directory succeeds.
pub fn execute(config: &BuildConfig, root: &Path) -> Result<CleanOutcome, AppError> {
    let output_dir = root.join(&config.output.dir);

    if !output_dir.exists() {
        return Ok(CleanOutcome { output_dir, removed: false });
    }

    fs::remove_dir_all(&output_dir)?;
    Ok(CleanOutcome { output_dir, removed: true })
}
