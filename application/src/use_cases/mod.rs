//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_tool_runners;
