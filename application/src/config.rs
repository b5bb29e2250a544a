//! Application-level configuration.
//!
//! Controls how the load use case finds and translates runner elements.
//! Built by the infrastructure layer from the TOML file and CLI flags.

use toolrunner_domain::{MultipleNestedPolicy, TOOL_RUNNER_TAG, ToolRunnerTranslator};

/// Translation behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
    /// Local name of runner elements to translate
    pub element_name: String,
    /// Handling of runners with more than one nested definition
    pub multiple_nested: MultipleNestedPolicy,
    /// Stop a document at the first runner that fails to translate
    pub fail_fast: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            element_name: TOOL_RUNNER_TAG.to_string(),
            multiple_nested: MultipleNestedPolicy::default(),
            fail_fast: true,
        }
    }
}

impl TranslationConfig {
    pub fn with_element_name(mut self, name: impl Into<String>) -> Self {
        self.element_name = name.into();
        self
    }

    pub fn with_multiple_nested(mut self, policy: MultipleNestedPolicy) -> Self {
        self.multiple_nested = policy;
        self
    }

    /// Collect every failure in a document instead of stopping at the first
    pub fn keep_going(mut self) -> Self {
        self.fail_fast = false;
        self
    }

    /// Creates the translator this configuration describes.
    pub fn translator(&self) -> ToolRunnerTranslator {
        ToolRunnerTranslator::new(self.element_name.clone(), self.multiple_nested)
    }
}
