pub mod config;
pub mod error;

pub use config::{
    BuildConfig, CONFIG_FILE, CompilerConfig, DEFAULT_CONFIG_TEMPLATE, OutputConfig,
    SourcesConfig, StaticAssetsConfig, parse_config_content,
};
pub use error::AppError;
