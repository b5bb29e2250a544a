//! Parsed sub-element values
//!
//! These are what a [`NestedDefinitionParser`](super::NestedDefinitionParser)
//! hands back for a nested tool definition. The translator treats them as
//! opaque and stores them as-is.

use serde::{Deserialize, Serialize};

/// Result of parsing one sub-element (`bean`, `ref`, `value`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParsedDefinition {
    /// Inline object definition
    Bean(BeanDefinition),
    /// Reference to a named object defined elsewhere
    Reference(String),
    /// Literal string value
    Value(String),
    /// Explicit null
    Null,
    /// Ordered collection (`list` and `set`)
    List(Vec<ParsedDefinition>),
}

impl ParsedDefinition {
    pub fn as_bean(&self) -> Option<&BeanDefinition> {
        match self {
            ParsedDefinition::Bean(bean) => Some(bean),
            _ => None,
        }
    }
}

/// Inline object definition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BeanDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Constructor arguments in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<ParsedDefinition>,
    /// Property assignments in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDefinition>,
}

impl BeanDefinition {
    /// Look up a property value by name
    pub fn property(&self, name: &str) -> Option<&ParsedDefinition> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

/// `<property name="..." .../>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub value: ParsedDefinition,
}
