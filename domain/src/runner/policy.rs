//! Policy for runners with more than one nested tool definition

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do when a runner has several nested (non-`arg`) children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultipleNestedPolicy {
    /// Fail with `MultipleNestedDefinitions` (default)
    #[default]
    Reject,
    /// Keep the last nested definition and warn about the others
    LastWins,
}

impl MultipleNestedPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            MultipleNestedPolicy::Reject => "reject",
            MultipleNestedPolicy::LastWins => "last-wins",
        }
    }
}

impl std::fmt::Display for MultipleNestedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MultipleNestedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "strict" => Ok(MultipleNestedPolicy::Reject),
            "last-wins" | "last_wins" | "lastwins" => Ok(MultipleNestedPolicy::LastWins),
            other => Err(format!(
                "unknown multiple_nested policy '{}' (expected 'reject' or 'last-wins')",
                other
            )),
        }
    }
}
