//! Nested definition parser abstraction
//!
//! The translator never interprets a nested tool definition itself. It
//! hands the element to a [`NestedDefinitionParser`] and stores whatever
//! comes back. The infrastructure layer provides `SubElementParser`.

use thiserror::Error;

use super::entities::ParsedDefinition;
use crate::element::{ConfigurationElement, ElementId};

/// Error type for nested definition parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NestedParseError {
    #[error("unsupported element {element}")]
    UnsupportedElement { element: ElementId },

    #[error("{element} requires the '{attribute}' attribute")]
    MissingAttribute {
        element: ElementId,
        attribute: String,
    },

    #[error(
        "{element} is only allowed to contain either a 'ref' attribute OR a 'value' attribute OR a sub-element"
    )]
    AmbiguousValue { element: ElementId },

    #[error("{element} must specify a ref or value")]
    MissingValue { element: ElementId },
}

/// Parses a nested definition element into an opaque value
pub trait NestedDefinitionParser: Send + Sync {
    fn parse_nested(
        &self,
        element: &ConfigurationElement,
    ) -> Result<ParsedDefinition, NestedParseError>;
}

impl<F> NestedDefinitionParser for F
where
    F: Fn(&ConfigurationElement) -> Result<ParsedDefinition, NestedParseError> + Send + Sync,
{
    fn parse_nested(
        &self,
        element: &ConfigurationElement,
    ) -> Result<ParsedDefinition, NestedParseError> {
        self(element)
    }
}
