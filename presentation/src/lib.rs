//! Presentation layer for toolrunner
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporting.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SimpleProgress;
