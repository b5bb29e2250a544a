//! Progress reporting while documents load
//!
//! Lines go to stderr so JSON on stdout stays machine-readable.

use colored::Colorize;
use std::path::Path;
use toolrunner_application::{LoadProgressNotifier, LoadedToolRunner};
use toolrunner_domain::ConfigurationError;

/// Prints one line per runner
pub struct SimpleProgress;

impl LoadProgressNotifier for SimpleProgress {
    fn on_document_start(&self, path: &Path, runner_count: usize) {
        eprintln!(
            "{} {} ({} runners)",
            "->".cyan(),
            path.display().to_string().bold(),
            runner_count
        );
    }

    fn on_runner_translated(&self, runner: &LoadedToolRunner) {
        eprintln!("  {} {}", "v".green(), runner.element);
    }

    fn on_runner_failed(&self, error: &ConfigurationError) {
        eprintln!("  {} {} (failed)", "x".red(), error.element());
    }
}
