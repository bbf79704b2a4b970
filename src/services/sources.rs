//! Source file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Enumerate compiler input files under `dir` (non-recursive).
///
/// Files match when their extension equals one of `extensions`. Results are
/// sorted lexicographically so repeated builds see the same order. A missing
/// directory yields an empty list, matching glob semantics where a pattern
/// over a nonexistent directory matches nothing.
pub fn enumerate_sources(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && matches_extension(&path, extensions) {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
