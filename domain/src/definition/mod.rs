//! Nested definitions handed back by the sub-element parser

pub mod entities;
pub mod traits;

pub use entities::{BeanDefinition, ParsedDefinition, PropertyDefinition};
pub use traits::{NestedDefinitionParser, NestedParseError};
