//! Tool runner domain module
//!
//! A `tool-runner` element describes one invocation of a command-line tool:
//! which tool to run and the arguments to pass it.
//!
//! ```text
//! <tool-runner tool-ref="myTool">        ToolRunnerDefinition {
//!     <arg value="-input"/>       ──▶        tool: Reference("myTool"),
//!     <arg value="/data"/>                   arguments: ["-input", "/data"],
//! </tool-runner>                         }
//! ```
//!
//! # Key Types
//!
//! - [`ToolRunnerTranslator`]: element to definition translation
//! - [`ToolRunnerDefinition`]: the translated record
//! - [`ToolSource`]: class name, reference, or nested definition
//! - [`MultipleNestedPolicy`]: handling of more than one nested child

pub mod entities;
pub mod policy;
pub mod translator;

pub use entities::{TOOL_CLASS_ATTR, TOOL_REF_ATTR, ToolRunnerDefinition, ToolSource};
pub use policy::MultipleNestedPolicy;
pub use translator::{TOOL_RUNNER_TAG, ToolRunnerTranslator};
