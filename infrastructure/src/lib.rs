//! Infrastructure layer for toolrunner
//!
//! This crate contains adapters that implement the ports defined
//! in the application and domain layers, including configuration file loading.

pub mod config;
pub mod definition;
pub mod xml;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileParserConfig,
};
pub use definition::SubElementParser;
pub use xml::XmlDocumentSource;
