//! Domain layer for toolrunner
//!
//! This crate contains the element model, the `tool-runner` translator and
//! the definition records it produces. It has no dependencies on
//! infrastructure or presentation concerns: no XML library, no file I/O.
//!
//! # Core Concepts
//!
//! - **ConfigurationElement**: an owned element tree built by a document source
//! - **ToolRunnerTranslator**: turns one runner element into a
//!   [`ToolRunnerDefinition`], enforcing that the tool comes from exactly one
//!   of `tool-class`, `tool-ref` or a nested definition
//! - **NestedDefinitionParser**: the injected collaborator that interprets
//!   nested definitions

pub mod core;
pub mod definition;
pub mod element;
pub mod runner;

// Re-export commonly used types
pub use core::error::ConfigurationError;
pub use definition::{
    BeanDefinition, NestedDefinitionParser, NestedParseError, ParsedDefinition, PropertyDefinition,
};
pub use element::{
    ARG_TAG, ArgNode, Attribute, ChildNode, ConfigIssue, ConfigIssueCode, ConfigurationElement,
    ElementId, Severity, SourcePosition,
};
pub use runner::{
    MultipleNestedPolicy, TOOL_CLASS_ATTR, TOOL_REF_ATTR, TOOL_RUNNER_TAG, ToolRunnerDefinition,
    ToolRunnerTranslator, ToolSource,
};
