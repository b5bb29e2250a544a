//! Tool runner entities

use crate::definition::ParsedDefinition;
use serde::{Deserialize, Serialize};

/// Attribute naming the tool's class
pub const TOOL_CLASS_ATTR: &str = "tool-class";
/// Attribute naming an existing tool object
pub const TOOL_REF_ATTR: &str = "tool-ref";

/// Where a runner's tool comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ToolSource {
    /// `tool-class="..."`
    Class { name: String },
    /// `tool-ref="..."`
    Reference { name: String },
    /// A nested child element
    Nested { definition: ParsedDefinition },
}

impl ToolSource {
    pub fn class(name: impl Into<String>) -> Self {
        ToolSource::Class { name: name.into() }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        ToolSource::Reference { name: name.into() }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, ToolSource::Nested { .. })
    }
}

/// Translated `tool-runner` element.
///
/// `tool` and `arguments` are the field names consumers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolRunnerDefinition {
    pub tool: Option<ToolSource>,
    /// Trimmed `arg` values in document order
    pub arguments: Vec<String>,
}
