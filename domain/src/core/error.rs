//! Domain error types

use crate::definition::NestedParseError;
use crate::element::ElementId;
use thiserror::Error;

/// Why a runner element could not be translated.
///
/// These are configuration-validation failures surfaced at load time,
/// never runtime faults of the tool itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "Cannot define nested and top-level tool-class/tool-ref attributes - use only one: {element}"
    )]
    ConflictingToolDefinition { element: ElementId },

    #[error("Cannot define both tool-class and tool-ref attributes - use only one: {element}")]
    ConflictingToolAttributes { element: ElementId },

    #[error("Only one nested tool definition is allowed in {element}: found {first} and {second}")]
    MultipleNestedDefinitions {
        element: ElementId,
        first: ElementId,
        second: ElementId,
    },

    #[error("Invalid nested tool definition in {element}: {source}")]
    NestedDefinition {
        element: ElementId,
        #[source]
        source: NestedParseError,
    },

    #[error("Expected <{expected}> element, found {found}")]
    UnexpectedElement { expected: String, found: ElementId },
}

impl ConfigurationError {
    /// The runner element the error is reported against
    pub fn element(&self) -> &ElementId {
        match self {
            ConfigurationError::ConflictingToolDefinition { element }
            | ConfigurationError::ConflictingToolAttributes { element }
            | ConfigurationError::MultipleNestedDefinitions { element, .. }
            | ConfigurationError::NestedDefinition { element, .. } => element,
            ConfigurationError::UnexpectedElement { found, .. } => found,
        }
    }

    /// Check if this error comes from mixing attribute and nested tool styles
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ConfigurationError::ConflictingToolDefinition { .. }
                | ConfigurationError::ConflictingToolAttributes { .. }
        )
    }
}
