//! Entry points used by the manager bootstrapper.

use std::fs;
use std::path::Path;

use crate::api::Configuration;
use crate::error::ConfigError;
use crate::options::RuntimeOptions;
use crate::registry::SchemaRegistry;

/// Loads the configuration at `path` and derives the runtime options.
///
/// `None`, or an empty path, starts from the zero-value configuration. In
/// both cases the result is fully defaulted before translation.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, carrying the
/// operating system error untouched, and any decode error raised by
/// [`SchemaRegistry::decode`].
pub fn load(
    registry: &SchemaRegistry,
    path: Option<&Path>,
) -> Result<(RuntimeOptions, Configuration), ConfigError> {
    let mut config = match path.filter(|candidate| !candidate.as_os_str().is_empty()) {
        Some(file) => {
            let bytes = fs::read(file).map_err(|source| ConfigError::read(file, source))?;
            registry.decode(&bytes)?
        }
        None => Configuration::default(),
    };
    registry.default_configuration(&mut config);
    let options = RuntimeOptions::from_configuration(&config);
    Ok((options, config))
}

/// Renders `config` as canonical YAML through `registry`.
///
/// Defaults are not applied here; default the configuration first when the
/// output should show effective values.
///
/// # Errors
///
/// Returns [`ConfigError::Serialization`] when the value cannot be rendered.
pub fn encode(registry: &SchemaRegistry, config: &Configuration) -> Result<String, ConfigError> {
    registry.encode(config)
}
