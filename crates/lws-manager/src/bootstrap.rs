//! Manager bootstrap orchestration.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

use lws_config::{ConfigError, Configuration, RuntimeOptions, SchemaRegistry};

use crate::health::HealthReporter;

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the defaulted configuration and its runtime options.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] raised while reading or decoding.
    fn load(
        &self,
        registry: &SchemaRegistry,
    ) -> Result<(RuntimeOptions, Configuration), ConfigError>;
}

/// Loader that reads an optional file through [`lws_config::load`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileConfigLoader {
    path: Option<Utf8PathBuf>,
}

impl FileConfigLoader {
    /// Loads from `path`, or from built-in defaults when `None`.
    #[must_use]
    pub const fn new(path: Option<Utf8PathBuf>) -> Self {
        Self { path }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(
        &self,
        registry: &SchemaRegistry,
    ) -> Result<(RuntimeOptions, Configuration), ConfigError> {
        lws_config::load(registry, self.path.as_ref().map(|path| path.as_std_path()))
    }
}

/// Loader returning a configuration built in memory.
///
/// The configuration is defaulted and translated on every load, the same way
/// a decoded file would be.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaticConfigLoader {
    configuration: Configuration,
}

impl StaticConfigLoader {
    /// Wraps `configuration`.
    #[must_use]
    pub const fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(
        &self,
        registry: &SchemaRegistry,
    ) -> Result<(RuntimeOptions, Configuration), ConfigError> {
        let mut configuration = self.configuration.clone();
        registry.default_configuration(&mut configuration);
        let options = RuntimeOptions::from_configuration(&configuration);
        Ok((options, configuration))
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: ConfigError,
    },
    /// The effective configuration could not be rendered for logging.
    #[error("failed to encode effective configuration: {source}")]
    Encoding {
        /// Underlying encoder error.
        #[source]
        source: ConfigError,
    },
}

/// Result of a successful bootstrap invocation.
#[derive(Debug, Clone)]
pub struct Manager {
    options: RuntimeOptions,
    configuration: Configuration,
    effective_config: String,
}

impl Manager {
    /// Runtime options the controllers start with.
    #[must_use]
    pub const fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    /// Fully defaulted configuration.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Canonical YAML rendering of [`Self::configuration`].
    #[must_use]
    pub fn effective_config(&self) -> &str {
        &self.effective_config
    }
}

/// Bootstraps the manager using the supplied collaborators.
///
/// # Errors
///
/// Returns [`BootstrapError`] when loading or encoding fails. The failure is
/// reported to `reporter` before it is returned.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    registry: &SchemaRegistry,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Manager, BootstrapError> {
    reporter.bootstrap_starting();

    let (options, configuration) = match loader.load(registry) {
        Ok(loaded) => loaded,
        Err(source) => {
            let error = BootstrapError::Configuration { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };

    let effective_config = match lws_config::encode(registry, &configuration) {
        Ok(text) => text,
        Err(source) => {
            let error = BootstrapError::Encoding { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };

    let manager = Manager {
        options,
        configuration,
        effective_config,
    };
    reporter.bootstrap_succeeded(&manager);
    Ok(manager)
}
