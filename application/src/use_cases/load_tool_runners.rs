//! Load tool runners use case
//!
//! Reads one configuration document, finds every runner element in it and
//! translates each one with [`ToolRunnerTranslator`].
//!
//! # Overview
//!
//! 1. **Load** - the [`DocumentSourcePort`] parses the document into an element tree
//! 2. **Locate** - runner elements are collected in document order
//! 3. **Inspect** - non-fatal [`ConfigIssue`]s are logged and kept on the result
//! 4. **Translate** - each runner becomes a [`ToolRunnerDefinition`]
//!
//! With `fail_fast` (the default) the first translation failure is returned
//! as [`LoadToolRunnersError::Configuration`]. Otherwise failures are
//! collected into [`LoadToolRunnersOutput::failures`] and loading continues.

use crate::config::TranslationConfig;
use crate::ports::document_source::{DocumentSourceError, DocumentSourcePort};
use crate::ports::progress::{LoadProgressNotifier, NoLoadProgress};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use toolrunner_domain::{
    ConfigIssue, ConfigurationElement, ConfigurationError, ElementId, NestedDefinitionParser,
    ToolRunnerDefinition, ToolRunnerTranslator,
};
use tracing::{debug, error, info, warn};

/// Errors that stop a whole document from loading
#[derive(Error, Debug)]
pub enum LoadToolRunnersError {
    #[error(transparent)]
    Source(#[from] DocumentSourceError),

    #[error("Configuration problem in {}: {source}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: ConfigurationError,
    },
}

/// One successfully translated runner
#[derive(Debug, Clone)]
pub struct LoadedToolRunner {
    /// The runner element the definition came from
    pub element: ElementId,
    pub definition: ToolRunnerDefinition,
    /// Non-fatal issues found on the element
    pub issues: Vec<ConfigIssue>,
}

/// Result of loading one document
#[derive(Debug, Clone)]
pub struct LoadToolRunnersOutput {
    pub path: PathBuf,
    /// Translated runners in document order
    pub runners: Vec<LoadedToolRunner>,
    /// Runners that failed to translate (only populated when not failing fast)
    pub failures: Vec<ConfigurationError>,
}

impl LoadToolRunnersOutput {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Look up a translated runner by its `id` attribute
    pub fn runner(&self, id: &str) -> Option<&LoadedToolRunner> {
        self.runners
            .iter()
            .find(|r| r.element.id.as_deref() == Some(id))
    }

    pub fn issue_count(&self) -> usize {
        self.runners.iter().map(|r| r.issues.len()).sum()
    }
}

/// Use case for loading the runners of a configuration document
pub struct LoadToolRunnersUseCase {
    source: Arc<dyn DocumentSourcePort>,
    nested: Arc<dyn NestedDefinitionParser>,
    translator: ToolRunnerTranslator,
    fail_fast: bool,
}

impl LoadToolRunnersUseCase {
    pub fn new(
        source: Arc<dyn DocumentSourcePort>,
        nested: Arc<dyn NestedDefinitionParser>,
        config: &TranslationConfig,
    ) -> Self {
        Self {
            source,
            nested,
            translator: config.translator(),
            fail_fast: config.fail_fast,
        }
    }

    /// Load the document at `path` with default (no-op) progress
    pub fn execute(&self, path: &Path) -> Result<LoadToolRunnersOutput, LoadToolRunnersError> {
        self.execute_with_progress(path, &NoLoadProgress)
    }

    /// Load the document at `path` with progress callbacks
    pub fn execute_with_progress(
        &self,
        path: &Path,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<LoadToolRunnersOutput, LoadToolRunnersError> {
        let root = self.source.load(path)?;
        self.translate_document(path, &root, progress)
    }

    /// Load an in-memory document; `origin` is used as its path
    pub fn execute_source(
        &self,
        source: &str,
        origin: &str,
    ) -> Result<LoadToolRunnersOutput, LoadToolRunnersError> {
        let root = self.source.parse(source, origin)?;
        self.translate_document(Path::new(origin), &root, &NoLoadProgress)
    }

    /// Translate every runner element under `root`
    pub fn translate_document(
        &self,
        path: &Path,
        root: &ConfigurationElement,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<LoadToolRunnersOutput, LoadToolRunnersError> {
        let elements = root.find_all(self.translator.element_name());
        info!(
            "Found {} <{}> element(s) in {}",
            elements.len(),
            self.translator.element_name(),
            path.display()
        );
        progress.on_document_start(path, elements.len());

        let mut output = LoadToolRunnersOutput {
            path: path.to_path_buf(),
            runners: Vec::with_capacity(elements.len()),
            failures: Vec::new(),
        };

        for element in elements {
            let issues = self.translator.inspect(element);
            for issue in &issues {
                warn!("{}", issue.message);
            }

            match self.translator.translate(element, self.nested.as_ref()) {
                Ok(definition) => {
                    debug!(
                        "Translated {} with {} argument(s)",
                        element.identity(),
                        definition.arguments.len()
                    );
                    let runner = LoadedToolRunner {
                        element: element.identity(),
                        definition,
                        issues,
                    };
                    progress.on_runner_translated(&runner);
                    output.runners.push(runner);
                }
                Err(error) => {
                    progress.on_runner_failed(&error);
                    if self.fail_fast {
                        error!("{}", error);
                        progress.on_document_complete(path);
                        return Err(LoadToolRunnersError::Configuration {
                            path: path.to_path_buf(),
                            source: error,
                        });
                    }
                    warn!("{}", error);
                    output.failures.push(error);
                }
            }
        }

        progress.on_document_complete(path);
        Ok(output)
    }
}
