//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The nested definition parser port lives in the domain layer
//! ([`toolrunner_domain::NestedDefinitionParser`]) because the translator
//! itself depends on it.

pub mod document_source;
pub mod progress;
