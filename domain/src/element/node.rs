//! Classification of a runner element's direct children

use super::entities::ConfigurationElement;

/// Tag name of an argument child
pub const ARG_TAG: &str = "arg";

/// A direct child of a runner element, classified once by tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildNode<'a> {
    /// `<arg value="..."/>`
    Arg(ArgNode<'a>),
    /// Any other element, read as a nested tool definition
    NestedDefinition(&'a ConfigurationElement),
}

/// An `arg` child with its raw (untrimmed) value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgNode<'a> {
    pub element: &'a ConfigurationElement,
    /// `None` when the `value` attribute is absent
    pub value: Option<&'a str>,
}

impl<'a> ArgNode<'a> {
    /// Argument with ASCII control characters and spaces stripped from
    /// both ends; an absent attribute reads as the empty string
    pub fn argument(&self) -> String {
        self.value
            .unwrap_or_default()
            .trim_matches(|c: char| c <= ' ')
            .to_string()
    }
}

impl<'a> ChildNode<'a> {
    pub fn classify(element: &'a ConfigurationElement) -> Self {
        if element.tag == ARG_TAG {
            ChildNode::Arg(ArgNode {
                element,
                value: element.attribute("value"),
            })
        } else {
            ChildNode::NestedDefinition(element)
        }
    }
}
