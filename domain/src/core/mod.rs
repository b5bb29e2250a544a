//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConfigurationError`]: why a runner element could not be translated

pub mod error;
