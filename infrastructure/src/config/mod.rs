//! Configuration file loading for toolrunner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLRUNNER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolrunner.toml` or `./.toolrunner.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/toolrunner/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileParserConfig,
};
pub use loader::ConfigLoader;
