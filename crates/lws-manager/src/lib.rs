//! Bootstrap logic for the LeaderWorkerSet controller manager.
//!
//! The manager reads its `Configuration` document through [`lws_config`],
//! fills in defaults, and derives the [`lws_config::RuntimeOptions`] the
//! controllers start with. The effective configuration is rendered back to
//! YAML and logged once so operators can see exactly which values are in
//! force.
//!
//! Health reporting hooks emit structured telemetry at each bootstrap stage.
//! Tests swap in their own [`ConfigLoader`] and [`HealthReporter`].

mod bootstrap;
mod cli;
mod health;
mod logging;
mod telemetry;

pub use bootstrap::{
    BootstrapError, ConfigLoader, FileConfigLoader, Manager, StaticConfigLoader, bootstrap_with,
};
pub use cli::{DEFAULT_LOG_FILTER, ManagerArgs};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use logging::{LogFormat, LogFormatParseError};
pub use telemetry::{TelemetryError, TelemetryHandle, TelemetrySettings, initialise_telemetry};

#[cfg(test)]
mod tests;
