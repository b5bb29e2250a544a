//! Application layer for toolrunner
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TranslationConfig;
pub use ports::{
    document_source::{DocumentSourceError, DocumentSourcePort},
    progress::{LoadProgressNotifier, NoLoadProgress},
};
pub use use_cases::load_tool_runners::{
    LoadToolRunnersError, LoadToolRunnersOutput, LoadToolRunnersUseCase, LoadedToolRunner,
};
