//! Element entities: an owned, read-only view of one XML element

use super::identity::{ElementId, SourcePosition};
use serde::{Deserialize, Serialize};

/// A single attribute on an element (local name, unprefixed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One node of a configuration document.
///
/// Built once by a document source and never mutated afterwards. Only
/// element children are kept; text nodes are folded into [`text`](Self::text).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigurationElement {
    /// Local tag name (namespace prefix stripped)
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<Attribute>,
    /// Direct child elements in document order
    pub children: Vec<ConfigurationElement>,
    /// Concatenated text content of direct text children
    pub text: String,
    /// Where the element starts in its source document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourcePosition>,
}

impl ConfigurationElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, child: ConfigurationElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Some(SourcePosition::new(line, column));
        self
    }

    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Identity used when reporting problems with this element
    pub fn identity(&self) -> ElementId {
        ElementId {
            tag: self.tag.clone(),
            id: self.attribute("id").map(str::to_string),
            position: self.position,
        }
    }

    /// Depth-first, document-order search for elements with the given tag.
    ///
    /// The element itself is included when it matches. Matches are not
    /// searched further, so a runner nested in another runner is not listed.
    pub fn find_all(&self, tag: &str) -> Vec<&ConfigurationElement> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a ConfigurationElement>) {
        if self.tag == tag {
            found.push(self);
            return;
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let element = ConfigurationElement::new("tool-runner")
            .with_attribute("id", "wordcount")
            .with_attribute("tool-ref", "myTool");

        assert_eq!(element.attribute("tool-ref"), Some("myTool"));
        assert!(element.has_attribute("id"));
        assert!(!element.has_attribute("tool-class"));
    }

    #[test]
    fn test_empty_attribute_is_present() {
        let element = ConfigurationElement::new("tool-runner").with_attribute("tool-class", "");
        assert!(element.has_attribute("tool-class"));
        assert_eq!(element.attribute("tool-class"), Some(""));
    }

    #[test]
    fn test_identity_carries_id_and_position() {
        let element = ConfigurationElement::new("tool-runner")
            .with_attribute("id", "runner")
            .at(4, 9);
        let id = element.identity();
        assert_eq!(id.tag, "tool-runner");
        assert_eq!(id.id.as_deref(), Some("runner"));
        assert_eq!(id.position, Some(SourcePosition::new(4, 9)));
    }

    #[test]
    fn test_find_all_in_document_order() {
        let root = ConfigurationElement::new("beans")
            .with_child(ConfigurationElement::new("tool-runner").with_attribute("id", "a"))
            .with_child(
                ConfigurationElement::new("bean").with_child(
                    ConfigurationElement::new("tool-runner").with_attribute("id", "b"),
                ),
            )
            .with_child(ConfigurationElement::new("tool-runner").with_attribute("id", "c"));

        let ids: Vec<_> = root
            .find_all("tool-runner")
            .iter()
            .filter_map(|e| e.attribute("id"))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_all_includes_self() {
        let root = ConfigurationElement::new("tool-runner");
        assert_eq!(root.find_all("tool-runner").len(), 1);
        assert!(root.find_all("bean").is_empty());
    }
}
