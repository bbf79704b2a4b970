//! tsmake: Compile TypeScript sources and stage static assets into a distribution directory.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use app::AppContext;
use app::commands::{build, clean, init};
use services::ProcessCompiler;

pub use app::commands::build::{BuildOptions, BuildReport};
pub use app::commands::clean::CleanOutcome;
pub use domain::{AppError, BuildConfig, CONFIG_FILE};
pub use ports::{Compiler, CompilerExit, CompilerInvocation};

/// Write a default `tsmake.toml` into the current directory.
pub fn init() -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    init::execute(&root)?;
    println!("✅ Created {}", CONFIG_FILE);
    Ok(())
}

/// Compile sources and stage static assets per `tsmake.toml`.
///
/// Prints the compiler command line before invoking it and a completion
/// line with elapsed whole seconds and the wall-clock finish time.
pub fn build(options: BuildOptions) -> Result<BuildReport, AppError> {
    let root = std::env::current_dir()?;
    let config = load_config(&root)?;
    let ctx = AppContext::new(config, ProcessCompiler);

    let report = build::execute(&ctx, &root, options)?;

    if report.dry_run {
        println!("Dry run: compiler not invoked; no files were written.");
    } else {
        println!(
            "Copied {} static asset file(s) to {}/",
            report.assets_copied,
            ctx.config().output.dir
        );
        println!(
            "✅ Build finished in {}s at {}",
            report.elapsed.as_secs(),
            Local::now().format("%H:%M:%S")
        );
    }

    Ok(report)
}

/// Remove the output directory configured in `tsmake.toml`.
pub fn clean() -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let config = load_config(&root)?;

    let outcome = clean::execute(&config, &root)?;
    if outcome.removed {
        println!("✅ Removed {}/", config.output.dir);
    } else {
        println!("Nothing to clean: {}/ does not exist", config.output.dir);
    }
    Ok(())
}

/// Load and validate `tsmake.toml` from the given project root.
pub fn load_config(root: &Path) -> Result<BuildConfig, AppError> {
    let config_path: PathBuf = root.join(CONFIG_FILE);
    let content = fs::read_to_string(&config_path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound { AppError::ConfigMissing } else { err.into() }
    })?;
    domain::parse_config_content(&content)
}
