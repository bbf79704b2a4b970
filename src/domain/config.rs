//! Build configuration loaded from `tsmake.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "tsmake.toml";

/// Commented configuration written by `tsmake init`.
///
/// Parsing this template must produce `BuildConfig::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tsmake build configuration

[sources]
# Directory scanned for source files (non-recursive)
dir = "src"
# File extensions handed to the compiler
extensions = ["ts"]
# Files always appended after the discovered sources
extra_files = []

[output]
dir = "dist"

[static_assets]
# Copied verbatim into the output directory after compilation
dir = "src/static"

[compiler]
program = "tsc"
module = "ES2020"
target = "ES2020"
allow_js = true
source_map = true
always_strict = true
extra_args = []
"#;

/// Configuration for a build loaded from `tsmake.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Source discovery configuration.
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Static-assets configuration.
    #[serde(default)]
    pub static_assets: StaticAssetsConfig,
    /// External compiler configuration.
    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.sources.validate()?;
        self.output.validate()?;
        self.compiler.validate()?;
        Ok(())
    }
}

/// Where compiler input files come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Directory scanned for source files (non-recursive).
    #[serde(default = "default_sources_dir")]
    pub dir: String,
    /// File extensions handed to the compiler.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Files always appended after the discovered sources.
    #[serde(default)]
    pub extra_files: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            dir: default_sources_dir(),
            extensions: default_extensions(),
            extra_files: Vec::new(),
        }
    }
}

impl SourcesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.extensions.is_empty() {
            return Err(AppError::configuration(
                "sources.extensions must list at least one extension",
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|ext| ext.starts_with('.')) {
            return Err(AppError::configuration(format!(
                "sources.extensions entries must not start with '.': '{}'",
                ext
            )));
        }
        Ok(())
    }
}

/// Where build products land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving compiled files and copied assets.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.trim().is_empty() {
            return Err(AppError::configuration("output.dir must not be empty"));
        }
        Ok(())
    }
}

/// Static files copied verbatim into the output directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticAssetsConfig {
    /// Directory whose contents are copied into `output.dir`.
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self { dir: default_static_dir() }
    }
}

/// External compiler invocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compiler executable.
    #[serde(default = "default_program")]
    pub program: String,
    /// Emitted module format (`-m`).
    #[serde(default = "default_language_level")]
    pub module: String,
    /// Emitted language target (`-t`).
    #[serde(default = "default_language_level")]
    pub target: String,
    /// Accept JavaScript input files (`--allowJs`).
    #[serde(default = "default_true")]
    pub allow_js: bool,
    /// Emit source maps (`--sourceMap`).
    #[serde(default = "default_true")]
    pub source_map: bool,
    /// Parse in strict mode and emit "use strict" (`--alwaysStrict`).
    #[serde(default = "default_true")]
    pub always_strict: bool,
    /// Extra arguments appended after the fixed flags.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            module: default_language_level(),
            target: default_language_level(),
            allow_js: true,
            source_map: true,
            always_strict: true,
            extra_args: Vec::new(),
        }
    }
}

impl CompilerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::configuration("compiler.program must not be empty"));
        }
        Ok(())
    }
}

fn default_sources_dir() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_static_dir() -> String {
    "src/static".to_string()
}

fn default_program() -> String {
    "tsc".to_string()
}

fn default_language_level() -> String {
    "ES2020".to_string()
}

fn default_true() -> bool {
    true
}

/// Parse and validate build configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BuildConfig, AppError> {
    let config: BuildConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
