//! Progress notification port
//!
//! Defines the interface for reporting progress while a document's runners
//! are translated.

use crate::use_cases::load_tool_runners::LoadedToolRunner;
use std::path::Path;
use toolrunner_domain::ConfigurationError;

/// Callback for progress updates during loading
///
/// Implementations live in the presentation layer.
pub trait LoadProgressNotifier: Send + Sync {
    /// Called once the document is parsed and its runners are located
    fn on_document_start(&self, path: &Path, runner_count: usize);

    /// Called after each runner translates successfully
    fn on_runner_translated(&self, runner: &LoadedToolRunner);

    /// Called for each runner that fails to translate
    fn on_runner_failed(&self, error: &ConfigurationError);

    /// Called when every runner in the document has been visited
    fn on_document_complete(&self, _path: &Path) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoLoadProgress;

impl LoadProgressNotifier for NoLoadProgress {
    fn on_document_start(&self, _path: &Path, _runner_count: usize) {}
    fn on_runner_translated(&self, _runner: &LoadedToolRunner) {}
    fn on_runner_failed(&self, _error: &ConfigurationError) {}
}
