//! BDD test world: holds the loader, reporter, and bootstrap outcome for step functions.

use std::cell::RefCell;
use std::sync::Arc;

use lws_config::SchemaRegistry;

use crate::bootstrap::{BootstrapError, ConfigLoader, Manager, StaticConfigLoader, bootstrap_with};

use super::config_loader::{DocumentConfigLoader, FailingConfigLoader};
use super::reporter::RecordingHealthReporter;

pub type StepResult = Result<(), String>;

/// Scenario world shared across BDD steps.
pub struct TestWorld {
    loader: Box<dyn ConfigLoader>,
    registry: SchemaRegistry,
    pub reporter: Arc<RecordingHealthReporter>,
    manager: Option<Manager>,
    bootstrap_error: Option<BootstrapError>,
}

impl TestWorld {
    /// Builds a world that bootstraps from built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loader: Box::new(StaticConfigLoader::default()),
            registry: SchemaRegistry::new(),
            reporter: Arc::new(RecordingHealthReporter::default()),
            manager: None,
            bootstrap_error: None,
        }
    }

    /// Installs a loader reading `contents` from a file.
    pub fn use_document(&mut self, contents: &str) {
        self.loader = Box::new(DocumentConfigLoader::new(contents));
        self.reset_results();
    }

    /// Installs a loader that always fails to read.
    pub fn use_failing_loader(&mut self) {
        self.loader = Box::new(FailingConfigLoader::new());
        self.reset_results();
    }

    /// Runs the bootstrap sequence once.
    pub fn bootstrap(&mut self) {
        if self.manager.is_some() || self.bootstrap_error.is_some() {
            return;
        }
        match bootstrap_with(&*self.loader, &self.registry, self.reporter.clone()) {
            Ok(manager) => self.manager = Some(manager),
            Err(error) => self.bootstrap_error = Some(error),
        }
    }

    /// Returns the bootstrap error, if any.
    #[must_use]
    pub fn bootstrap_error(&self) -> Option<&BootstrapError> {
        self.bootstrap_error.as_ref()
    }

    /// Returns the bootstrapped manager, if any.
    #[must_use]
    pub fn manager(&self) -> Option<&Manager> {
        self.manager.as_ref()
    }

    fn reset_results(&mut self) {
        self.manager = None;
        self.bootstrap_error = None;
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Default test world fixture.
#[must_use]
pub fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::new())
}
