//! Document source port
//!
//! Defines how the application layer obtains the element tree of a
//! configuration document.

use std::path::{Path, PathBuf};
use thiserror::Error;
use toolrunner_domain::ConfigurationElement;

/// Errors from reading or parsing a configuration document
#[derive(Error, Debug)]
pub enum DocumentSourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {origin}: {message}")]
    Malformed { origin: String, message: String },
}

/// Port for loading configuration documents
///
/// Implementations (adapters) live in the infrastructure layer and return
/// the document's root element with every descendant element attached.
pub trait DocumentSourcePort: Send + Sync {
    /// Load and parse the document at `path`
    fn load(&self, path: &Path) -> Result<ConfigurationElement, DocumentSourceError>;

    /// Parse an in-memory document; `origin` names it in error messages
    fn parse(&self, source: &str, origin: &str)
    -> Result<ConfigurationElement, DocumentSourceError>;
}
