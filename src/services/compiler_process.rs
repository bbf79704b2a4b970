//! Compiler adapter backed by an external process.

use std::process::Command;

use crate::domain::AppError;
use crate::ports::{Compiler, CompilerExit, CompilerInvocation};

/// Runs the configured compiler as a child process.
///
/// Stdout/stderr are inherited so compiler diagnostics reach the console
/// verbatim. The exit status is reported to the caller rather than checked
/// here; the build command decides whether a failure aborts the build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCompiler;

impl Compiler for ProcessCompiler {
    fn run(&self, invocation: &CompilerInvocation) -> Result<CompilerExit, AppError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|err| AppError::CompilerLaunch {
                program: invocation.program.clone(),
                error: err.to_string(),
            })?;

        Ok(CompilerExit { success: status.success(), code: status.code() })
    }
}
