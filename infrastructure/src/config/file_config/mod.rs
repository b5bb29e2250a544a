//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! after validation.

mod output;
mod parser;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use parser::FileParserConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolrunner_application::TranslationConfig;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("parser.element cannot be empty")]
    EmptyElementName,

    #[error("parser.multiple_nested: unknown value '{0}' (expected 'reject' or 'last-wins')")]
    InvalidPolicy(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Runner element settings
    pub parser: FileParserConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.parser.element.trim().is_empty() {
            return Err(ConfigValidationError::EmptyElementName);
        }
        self.parser.parse_multiple_nested()?;
        Ok(())
    }

    /// Convert to application-layer TranslationConfig
    pub fn to_translation_config(&self) -> Result<TranslationConfig, ConfigValidationError> {
        self.validate()?;
        Ok(TranslationConfig {
            element_name: self.parser.element.trim().to_string(),
            multiple_nested: self.parser.parse_multiple_nested()?,
            fail_fast: self.parser.fail_fast,
        })
    }
}
