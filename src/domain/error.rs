use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for tsmake operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// tsmake.toml is not valid TOML.
    #[error("Invalid tsmake.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Semantic configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// No tsmake.toml found in the current directory.
    #[error("No tsmake.toml found in current directory. Run 'tsmake init' first.")]
    ConfigMissing,

    /// tsmake.toml already exists at the target location.
    #[error("tsmake.toml already exists")]
    ConfigExists,

    /// The compiler process could not be started.
    #[error("Failed to launch '{program}': {error}")]
    CompilerLaunch { program: String, error: String },

    /// The compiler ran but reported failure.
    #[error("Compiler exited with {}", .code.map_or_else(|| "no status code (terminated by signal)".to_string(), |c| format!("status {}", c)))]
    CompilerFailed { code: Option<i32> },

    /// The configured static-assets directory does not exist.
    #[error("Static assets directory '{}' does not exist", .0.display())]
    StaticAssetsMissing(PathBuf),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
