//! Non-fatal diagnostics for runner elements.
//!
//! Issues never stop translation; callers decide whether to log, print,
//! or ignore them. Fatal problems are [`ConfigurationError`](crate::ConfigurationError)s.

use super::identity::ElementId;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `<arg>` without a `value` attribute; contributes an empty argument.
    MissingArgValue,
    /// `<arg value="   ">`; trims to an empty argument.
    BlankArgValue,
    /// A later nested definition replaces an earlier one.
    SupersededNestedDefinition,
}

/// A detected issue on one element.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub element: ElementId,
    pub message: String,
}
