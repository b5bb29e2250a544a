//! Parser configuration from TOML (`[parser]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use toolrunner_domain::{MultipleNestedPolicy, TOOL_RUNNER_TAG};

/// Raw parser configuration from TOML
///
/// # Example
///
/// ```toml
/// [parser]
/// element = "tool-runner"        # local name of runner elements
/// multiple_nested = "reject"     # "reject" or "last-wins"
/// fail_fast = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParserConfig {
    /// Local name of runner elements
    pub element: String,
    /// Policy for runners with several nested definitions
    pub multiple_nested: String,
    /// Stop a document at the first failing runner
    pub fail_fast: bool,
}

impl Default for FileParserConfig {
    fn default() -> Self {
        Self {
            element: TOOL_RUNNER_TAG.to_string(),
            multiple_nested: MultipleNestedPolicy::default().as_str().to_string(),
            fail_fast: true,
        }
    }
}

impl FileParserConfig {
    /// Parse multiple_nested string into MultipleNestedPolicy
    ///
    /// Accepts: "reject", "strict", "last-wins", "last_wins"
    pub fn parse_multiple_nested(&self) -> Result<MultipleNestedPolicy, ConfigValidationError> {
        self.multiple_nested
            .parse()
            .map_err(|_| ConfigValidationError::InvalidPolicy(self.multiple_nested.clone()))
    }
}
