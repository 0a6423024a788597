//! Command-line flags for the manager binary.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;

use crate::logging::LogFormat;
use crate::telemetry::TelemetrySettings;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Command-line interface for the LeaderWorkerSet controller manager.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "lws-manager", version)]
pub struct ManagerArgs {
    /// Path to a `Configuration` document; built-in defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
    /// Filter directive controlling which log events are emitted.
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Log output format.
    #[arg(long, value_name = "FORMAT", default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl ManagerArgs {
    /// Configuration path, if one was given.
    #[must_use]
    pub fn config_path(&self) -> Option<&Utf8Path> {
        self.config.as_deref()
    }

    /// Telemetry settings selected on the command line.
    #[must_use]
    pub fn telemetry_settings(&self) -> TelemetrySettings {
        TelemetrySettings::new(self.log_filter.clone(), self.log_format)
    }
}
