//! `tool-runner` element translation
//!
//! Turns one runner element into a [`ToolRunnerDefinition`]. A runner gets
//! its tool from exactly one place:
//!
//! | Source | Element shape |
//! |--------|---------------|
//! | class | `<tool-runner tool-class="org.example.Tool">` |
//! | reference | `<tool-runner tool-ref="myTool">` |
//! | nested | `<tool-runner><bean class="org.example.Tool"/></tool-runner>` |
//!
//! Mixing them is a [`ConfigurationError`]. `arg` children are collected
//! into [`ToolRunnerDefinition::arguments`] regardless of the tool source.
//!
//! # Examples
//!
//! ```
//! use toolrunner_domain::{
//!     ConfigurationElement, NestedParseError, ParsedDefinition, ToolRunnerTranslator, ToolSource,
//! };
//!
//! let element = ConfigurationElement::new("tool-runner")
//!     .with_attribute("tool-ref", "myTool")
//!     .with_child(ConfigurationElement::new("arg").with_attribute("value", "-input"))
//!     .with_child(ConfigurationElement::new("arg").with_attribute("value", " /data "));
//!
//! let nested = |_: &ConfigurationElement| -> Result<ParsedDefinition, NestedParseError> {
//!     Ok(ParsedDefinition::Null)
//! };
//! let definition = ToolRunnerTranslator::default()
//!     .translate(&element, &nested)
//!     .unwrap();
//!
//! assert_eq!(definition.tool, Some(ToolSource::reference("myTool")));
//! assert_eq!(definition.arguments, vec!["-input", "/data"]);
//! ```

use super::entities::{TOOL_CLASS_ATTR, TOOL_REF_ATTR, ToolRunnerDefinition, ToolSource};
use super::policy::MultipleNestedPolicy;
use crate::core::error::ConfigurationError;
use crate::definition::{NestedDefinitionParser, ParsedDefinition};
use crate::element::{
    ChildNode, ConfigIssue, ConfigIssueCode, ConfigurationElement, ElementId, Severity,
};

/// Default local name of runner elements
pub const TOOL_RUNNER_TAG: &str = "tool-runner";

/// Translates runner elements into [`ToolRunnerDefinition`]s
#[derive(Debug, Clone)]
pub struct ToolRunnerTranslator {
    element_name: String,
    policy: MultipleNestedPolicy,
}

impl Default for ToolRunnerTranslator {
    fn default() -> Self {
        Self {
            element_name: TOOL_RUNNER_TAG.to_string(),
            policy: MultipleNestedPolicy::default(),
        }
    }
}

impl ToolRunnerTranslator {
    pub fn new(element_name: impl Into<String>, policy: MultipleNestedPolicy) -> Self {
        Self {
            element_name: element_name.into(),
            policy,
        }
    }

    pub fn with_policy(mut self, policy: MultipleNestedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn policy(&self) -> MultipleNestedPolicy {
        self.policy
    }

    /// Translate one runner element.
    ///
    /// Children are visited once, in document order. The first nested
    /// definition seen while `tool-class` or `tool-ref` is set fails the
    /// whole element. Setting both attributes is only reported when no
    /// nested definition is present.
    pub fn translate(
        &self,
        element: &ConfigurationElement,
        nested: &dyn NestedDefinitionParser,
    ) -> Result<ToolRunnerDefinition, ConfigurationError> {
        if element.tag != self.element_name {
            return Err(ConfigurationError::UnexpectedElement {
                expected: self.element_name.clone(),
                found: element.identity(),
            });
        }

        let has_attribute_tool =
            element.has_attribute(TOOL_CLASS_ATTR) || element.has_attribute(TOOL_REF_ATTR);
        let mut arguments = Vec::new();
        let mut nested_tool: Option<(ElementId, ParsedDefinition)> = None;

        for child in &element.children {
            match ChildNode::classify(child) {
                ChildNode::Arg(arg) => arguments.push(arg.argument()),
                ChildNode::NestedDefinition(definition) => {
                    if has_attribute_tool {
                        return Err(ConfigurationError::ConflictingToolDefinition {
                            element: element.identity(),
                        });
                    }
                    if let Some((first, _)) = &nested_tool {
                        if self.policy == MultipleNestedPolicy::Reject {
                            return Err(ConfigurationError::MultipleNestedDefinitions {
                                element: element.identity(),
                                first: first.clone(),
                                second: definition.identity(),
                            });
                        }
                    }

                    let parsed = nested.parse_nested(definition).map_err(|source| {
                        ConfigurationError::NestedDefinition {
                            element: element.identity(),
                            source,
                        }
                    })?;
                    nested_tool = Some((definition.identity(), parsed));
                }
            }
        }

        let tool = match nested_tool {
            Some((_, definition)) => Some(ToolSource::Nested { definition }),
            None => Self::attribute_tool(element)?,
        };

        Ok(ToolRunnerDefinition { tool, arguments })
    }

    /// Collect non-fatal issues for a runner element
    pub fn inspect(&self, element: &ConfigurationElement) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let mut nested: Option<ElementId> = None;

        for child in &element.children {
            match ChildNode::classify(child) {
                ChildNode::Arg(arg) => match arg.value {
                    None => issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::MissingArgValue,
                        element: child.identity(),
                        message: format!(
                            "{} has no 'value' attribute; an empty argument is passed",
                            child.identity()
                        ),
                    }),
                    Some(value) if value.trim().is_empty() => issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::BlankArgValue,
                        element: child.identity(),
                        message: format!(
                            "{} has a blank value; an empty argument is passed",
                            child.identity()
                        ),
                    }),
                    Some(_) => {}
                },
                ChildNode::NestedDefinition(definition) => {
                    let previous = nested.replace(definition.identity());
                    if let (Some(previous), MultipleNestedPolicy::LastWins) = (previous, self.policy)
                    {
                        issues.push(ConfigIssue {
                            severity: Severity::Warning,
                            code: ConfigIssueCode::SupersededNestedDefinition,
                            element: previous.clone(),
                            message: format!(
                                "nested tool definition {} is replaced by {}",
                                previous,
                                definition.identity()
                            ),
                        });
                    }
                }
            }
        }

        issues
    }

    fn attribute_tool(
        element: &ConfigurationElement,
    ) -> Result<Option<ToolSource>, ConfigurationError> {
        match (
            element.attribute(TOOL_CLASS_ATTR),
            element.attribute(TOOL_REF_ATTR),
        ) {
            (Some(_), Some(_)) => Err(ConfigurationError::ConflictingToolAttributes {
                element: element.identity(),
            }),
            (Some(class), None) => Ok(Some(ToolSource::class(class.trim()))),
            (None, Some(reference)) => Ok(Some(ToolSource::reference(reference.trim()))),
            (None, None) => Ok(None),
        }
    }
}
