//! Structured health reporting for manager lifecycle events.

use std::sync::Arc;

use crate::bootstrap::{BootstrapError, Manager};

/// Observer trait used to surface lifecycle events to telemetry sinks.
pub trait HealthReporter: Send + Sync {
    /// Invoked before configuration loading begins.
    fn bootstrap_starting(&self);

    /// Invoked after bootstrap completes successfully.
    fn bootstrap_succeeded(&self, manager: &Manager);

    /// Invoked when bootstrap fails.
    fn bootstrap_failed(&self, error: &BootstrapError);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, manager: &Manager) {
        (**self).bootstrap_succeeded(manager);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }
}

/// Default reporter that records lifecycle events using `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: "lws_manager::health",
            event = "bootstrap_starting",
            "starting manager bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, manager: &Manager) {
        let options = manager.options();
        tracing::info!(
            target: "lws_manager::health",
            event = "bootstrap_succeeded",
            health_probe_bind_address = %options.health_probe_bind_address,
            metrics_bind_address = %options.metrics.bind_address,
            leader_election = options.leader_election,
            leader_election_id = %options.leader_election_id,
            config = %manager.effective_config(),
            "Successfully loaded configuration"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: "lws_manager::health",
            event = "bootstrap_failed",
            error = %error,
            "manager bootstrap failed"
        );
    }
}
