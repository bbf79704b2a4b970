//! Static-asset staging.

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Recursively copy the contents of `src` into `dest`, merging with any
/// existing tree and overwriting same-named files.
///
/// `dest` is created when absent. Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, AppError> {
    if !src.is_dir() {
        return Err(AppError::StaticAssetsMissing(src.to_path_buf()));
    }

    fs::create_dir_all(dest)?;
    copy_dir_contents(src, dest)
}

fn copy_dir_contents(src: &Path, dest: &Path) -> Result<usize, AppError> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let source_path = entry.path();
        let target_path = dest.join(entry.file_name());

        if source_path.is_dir() {
            fs::create_dir_all(&target_path)?;
            copied += copy_dir_contents(&source_path, &target_path)?;
        } else {
            fs::copy(&source_path, &target_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}
