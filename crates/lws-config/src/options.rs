//! Runtime options consumed by the manager bootstrapper.
//!
//! [`RuntimeOptions`] is a flat projection of a [`Configuration`]. Translation
//! only fills options that are still unset, so values a caller seeds before
//! calling [`RuntimeOptions::apply_configuration`] take precedence over the
//! file.

use std::time::Duration;

use crate::api::Configuration;

/// Leader election lock kind used by the manager.
pub const LEASES_RESOURCE_LOCK: &str = "leases";

/// Options for the metrics server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsServerOptions {
    /// Address the metrics server binds to.
    pub bind_address: String,
}

/// Options for the webhook server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookServerOptions {
    /// Listening port; `0` leaves the choice to the server.
    pub port: u16,
    /// Bind host; empty means all interfaces.
    pub host: String,
    /// Directory holding the serving certificate and key.
    pub cert_dir: String,
}

/// Options handed to the manager runtime at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeOptions {
    /// Address the health probe server binds to.
    pub health_probe_bind_address: String,
    /// Route serving the readiness probe.
    pub readiness_endpoint_name: String,
    /// Route serving the liveness probe.
    pub liveness_endpoint_name: String,
    /// Metrics server options.
    pub metrics: MetricsServerOptions,
    /// Whether leader election is enabled.
    pub leader_election: bool,
    /// Lock kind used for leader election.
    pub leader_election_resource_lock: String,
    /// Name of the leader election lock object.
    pub leader_election_id: String,
    /// Namespace of the lock object; empty means the current namespace.
    pub leader_election_namespace: String,
    /// Leader election lease duration.
    pub lease_duration: Option<Duration>,
    /// Leader election renew deadline.
    pub renew_deadline: Option<Duration>,
    /// Leader election retry period.
    pub retry_period: Option<Duration>,
    /// Webhook server options.
    pub webhook_server: Option<WebhookServerOptions>,
    /// Controller manager settings copied verbatim from the configuration.
    pub controller: Option<serde_json::Value>,
}

impl RuntimeOptions {
    /// Translates `config` into fresh options.
    #[must_use]
    pub fn from_configuration(config: &Configuration) -> Self {
        let mut options = Self::default();
        options.apply_configuration(config);
        options
    }

    /// Fills every unset option from `config`.
    ///
    /// Leader election timers are copied whether or not election is enabled,
    /// but a zero timer counts as unset and is never copied. The enabled flag
    /// itself only changes when the configuration sets it.
    pub fn apply_configuration(&mut self, config: &Configuration) {
        fill_if_empty(&mut self.metrics.bind_address, &config.metrics.bind_address);
        fill_if_empty(
            &mut self.health_probe_bind_address,
            &config.health.health_probe_bind_address,
        );
        fill_if_empty(
            &mut self.readiness_endpoint_name,
            &config.health.readiness_endpoint_name,
        );
        fill_if_empty(
            &mut self.liveness_endpoint_name,
            &config.health.liveness_endpoint_name,
        );

        if let Some(election) = &config.leader_election {
            if let Some(enabled) = election.leader_elect {
                self.leader_election = enabled;
            }
            fill_if_empty(&mut self.leader_election_id, &election.resource_name);
            fill_if_empty(
                &mut self.leader_election_namespace,
                &election.resource_namespace,
            );
            fill_duration(&mut self.lease_duration, election.lease_duration);
            fill_duration(&mut self.renew_deadline, election.renew_deadline);
            fill_duration(&mut self.retry_period, election.retry_period);
        }
        fill_if_empty(&mut self.leader_election_resource_lock, LEASES_RESOURCE_LOCK);

        self.webhook_server
            .get_or_insert_with(|| WebhookServerOptions {
                port: config.webhook.port.unwrap_or_default(),
                host: config.webhook.host.clone(),
                cert_dir: config.webhook.cert_dir.clone(),
            });

        if self.controller.is_none() {
            self.controller.clone_from(&config.controller_manager);
        }
    }
}

fn fill_if_empty(option: &mut String, value: &str) {
    if option.is_empty() && !value.is_empty() {
        value.clone_into(option);
    }
}

fn fill_duration(option: &mut Option<Duration>, value: Duration) {
    if option.is_none() && !value.is_zero() {
        *option = Some(value);
    }
}
