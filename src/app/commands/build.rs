//! Build command execution logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{Compiler, CompilerExit, CompilerInvocation};
use crate::services::{copy_tree, enumerate_sources};

/// Options for the build command.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Print the compiler invocation without executing it.
    pub dry_run: bool,
    /// Copy static assets even when the compiler reports failure.
    pub keep_going: bool,
}

/// Result of a build execution.
#[derive(Debug)]
pub struct BuildReport {
    /// Discovered source files, relative to the project root.
    pub sources: Vec<PathBuf>,
    /// The constructed compiler command line.
    pub invocation: CompilerInvocation,
    /// Compiler exit state (None on a dry run).
    pub compiler_exit: Option<CompilerExit>,
    /// Number of static-asset files copied.
    pub assets_copied: usize,
    /// Wall-clock time from compiler start to copy completion.
    pub elapsed: Duration,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Execute the build command.
///
/// `root` is the project directory all configured paths are relative to.
/// The compiler invocation carries root-relative paths, so the external
/// compiler must run with `root` as its working directory (the CLI always
/// invokes this with the current directory).
pub fn execute<C: Compiler>(
    ctx: &AppContext<C>,
    root: &Path,
    options: BuildOptions,
) -> Result<BuildReport, AppError> {
    let config = ctx.config();

    let sources = discover_sources(ctx, root)?;
    let invocation = CompilerInvocation::new(config, &sources);

    println!("Building TypeScript: {}", invocation);

    if options.dry_run {
        return Ok(BuildReport {
            sources,
            invocation,
            compiler_exit: None,
            assets_copied: 0,
            elapsed: Duration::ZERO,
            dry_run: true,
        });
    }

    let started = Instant::now();

    let exit = ctx.compiler().run(&invocation)?;
    if !exit.success {
        if options.keep_going {
            println!("❌ Compiler reported failure; copying static assets anyway (--keep-going)");
        } else {
            return Err(AppError::CompilerFailed { code: exit.code });
        }
    }

    let static_dir = root.join(&config.static_assets.dir);
    let output_dir = root.join(&config.output.dir);
    let assets_copied = copy_tree(&static_dir, &output_dir)?;

    Ok(BuildReport {
        sources,
        invocation,
        compiler_exit: Some(exit),
        assets_copied,
        elapsed: started.elapsed(),
        dry_run: false,
    })
}

/// Enumerate sources under the configured directory, as root-relative paths.
fn discover_sources<C: Compiler>(
    ctx: &AppContext<C>,
    root: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let sources_dir = root.join(&ctx.config().sources.dir);
    let discovered = enumerate_sources(&sources_dir, &ctx.config().sources.extensions)?;

    Ok(discovered
        .into_iter()
        .map(|path| path.strip_prefix(root).map(Path::to_path_buf).unwrap_or(path))
        .collect())
}
