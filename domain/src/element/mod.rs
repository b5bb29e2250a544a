//! Configuration element model
//!
//! An owned tree mirroring the element structure of a configuration
//! document. Document sources in the infrastructure layer build it; the
//! translator only reads it.
//!
//! - [`ConfigurationElement`]: tag, attributes, children, text, position
//! - [`ChildNode`]: a runner child classified as `arg` or nested definition
//! - [`ElementId`]: what error messages point at
//! - [`ConfigIssue`]: non-fatal diagnostics

pub mod entities;
pub mod identity;
pub mod node;
pub mod validation;

pub use entities::{Attribute, ConfigurationElement};
pub use identity::{ElementId, SourcePosition};
pub use node::{ARG_TAG, ArgNode, ChildNode};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
