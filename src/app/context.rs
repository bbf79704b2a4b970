use crate::domain::BuildConfig;
use crate::ports::Compiler;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Compiler> {
    config: BuildConfig,
    compiler: C,
}

impl<C: Compiler> AppContext<C> {
    /// Create a new application context.
    pub fn new(config: BuildConfig, compiler: C) -> Self {
        Self { config, compiler }
    }

    /// Get a reference to the build configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Get a reference to the compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }
}
