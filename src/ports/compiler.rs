//! External compiler port definition.

use std::fmt::{self, Display};
use std::path::PathBuf;

use crate::domain::{AppError, BuildConfig};

/// A fully constructed compiler command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    /// Compiler executable.
    pub program: String,
    /// Ordered argument list: fixed flags, then sources, then extra files.
    pub args: Vec<String>,
    input_count: usize,
}

impl CompilerInvocation {
    /// Construct the invocation for a set of discovered sources.
    ///
    /// Argument order is fixed flags, extra args, discovered sources in
    /// enumeration order, then the configured extra files.
    pub fn new(config: &BuildConfig, sources: &[PathBuf]) -> Self {
        let compiler = &config.compiler;
        let mut args = Vec::new();

        if compiler.allow_js {
            args.push("--allowJs".to_string());
        }
        args.push("-m".to_string());
        args.push(compiler.module.clone());
        args.push("-t".to_string());
        args.push(compiler.target.clone());
        args.push("--outDir".to_string());
        args.push(config.output.dir.clone());
        if compiler.source_map {
            args.push("--sourceMap".to_string());
        }
        if compiler.always_strict {
            args.push("--alwaysStrict".to_string());
        }
        args.extend(compiler.extra_args.iter().cloned());

        args.extend(sources.iter().map(|path| path.display().to_string()));
        args.extend(config.sources.extra_files.iter().cloned());

        let input_count = sources.len() + config.sources.extra_files.len();
        Self { program: compiler.program.clone(), args, input_count }
    }

    /// The compiler's positional input files: discovered sources, then the
    /// configured extra files.
    pub fn input_files(&self) -> Vec<&str> {
        self.args[self.args.len() - self.input_count..].iter().map(String::as_str).collect()
    }
}

impl Display for CompilerInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit state of a finished compiler process.
///
/// Own type because `std::process::ExitStatus` cannot be constructed in
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerExit {
    /// Whether the process reported success.
    pub success: bool,
    /// Status code, if the process exited normally.
    pub code: Option<i32>,
}

impl CompilerExit {
    /// A successful exit.
    pub fn ok() -> Self {
        Self { success: true, code: Some(0) }
    }

    /// A failing exit with the given status code.
    pub fn failed(code: i32) -> Self {
        Self { success: false, code: Some(code) }
    }
}

/// Abstraction over running the external compiler.
pub trait Compiler {
    /// Run the invocation to completion and report its exit state.
    ///
    /// Implementations stream compiler output to the console; an error is
    /// only returned when the process cannot be run at all.
    fn run(&self, invocation: &CompilerInvocation) -> Result<CompilerExit, AppError>;
}
