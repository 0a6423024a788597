//! Default values filled into a decoded configuration.

use std::time::Duration;

use crate::api::{
    ClientConnection, Configuration, InternalCertManagement, LeaderElectionConfiguration,
};

/// Default bind address for the health probe server.
pub const DEFAULT_HEALTH_PROBE_BIND_ADDRESS: &str = ":8081";

/// Default route for the readiness probe.
pub const DEFAULT_READINESS_ENDPOINT: &str = "/readyz";

/// Default route for the liveness probe.
pub const DEFAULT_LIVENESS_ENDPOINT: &str = "/healthz";

/// Default bind address for the metrics server.
pub const DEFAULT_METRICS_BIND_ADDRESS: &str = ":8443";

/// Default name of the leader election lock object.
pub const DEFAULT_LEADER_ELECTION_ID: &str = "b8b2488c.x-k8s.io";

/// Default leader election lock kind.
pub const DEFAULT_RESOURCE_LOCK: &str = "leases";

/// Default leader election lease duration.
pub const DEFAULT_LEADER_ELECTION_LEASE_DURATION: Duration = Duration::from_secs(15);

/// Default leader election renew deadline.
pub const DEFAULT_LEADER_ELECTION_RENEW_DEADLINE: Duration = Duration::from_secs(10);

/// Default leader election retry period.
pub const DEFAULT_LEADER_ELECTION_RETRY_PERIOD: Duration = Duration::from_secs(2);

/// Default webhook server port.
pub const DEFAULT_WEBHOOK_PORT: u16 = 9443;

/// Default directory holding the webhook serving certificate.
pub const DEFAULT_WEBHOOK_CERT_DIR: &str = "/tmp/k8s-webhook-server/serving-certs";

/// Default service fronting the webhook server.
pub const DEFAULT_WEBHOOK_SERVICE_NAME: &str = "lws-webhook-service";

/// Default secret receiving the webhook serving certificate.
pub const DEFAULT_WEBHOOK_SECRET_NAME: &str = "lws-webhook-server-cert";

/// Default API client queries per second.
pub const DEFAULT_CLIENT_CONNECTION_QPS: f32 = 500.0;

/// Default API client burst.
pub const DEFAULT_CLIENT_CONNECTION_BURST: i32 = 500;

/// Fills every unset field of `config` with its default.
///
/// Sections are defaulted independently, so a partially written section keeps
/// its explicit values. Applying the defaults twice changes nothing.
pub(crate) fn apply_defaults(config: &mut Configuration) {
    fill_if_empty(
        &mut config.health.health_probe_bind_address,
        DEFAULT_HEALTH_PROBE_BIND_ADDRESS,
    );
    fill_if_empty(
        &mut config.health.readiness_endpoint_name,
        DEFAULT_READINESS_ENDPOINT,
    );
    fill_if_empty(
        &mut config.health.liveness_endpoint_name,
        DEFAULT_LIVENESS_ENDPOINT,
    );
    fill_if_empty(&mut config.metrics.bind_address, DEFAULT_METRICS_BIND_ADDRESS);

    config.webhook.port.get_or_insert(DEFAULT_WEBHOOK_PORT);
    fill_if_empty(&mut config.webhook.cert_dir, DEFAULT_WEBHOOK_CERT_DIR);

    default_leader_election(
        config
            .leader_election
            .get_or_insert_with(LeaderElectionConfiguration::default),
    );
    default_internal_cert_management(
        config
            .internal_cert_management
            .get_or_insert_with(InternalCertManagement::default),
    );
    default_client_connection(
        config
            .client_connection
            .get_or_insert_with(ClientConnection::default),
    );
}

fn default_leader_election(election: &mut LeaderElectionConfiguration) {
    election.leader_elect.get_or_insert(true);
    fill_duration(
        &mut election.lease_duration,
        DEFAULT_LEADER_ELECTION_LEASE_DURATION,
    );
    fill_duration(
        &mut election.renew_deadline,
        DEFAULT_LEADER_ELECTION_RENEW_DEADLINE,
    );
    fill_duration(
        &mut election.retry_period,
        DEFAULT_LEADER_ELECTION_RETRY_PERIOD,
    );
    fill_if_empty(&mut election.resource_lock, DEFAULT_RESOURCE_LOCK);
    fill_if_empty(&mut election.resource_name, DEFAULT_LEADER_ELECTION_ID);
}

fn default_internal_cert_management(management: &mut InternalCertManagement) {
    // A disabled block keeps its names unset.
    if !*management.enable.get_or_insert(true) {
        return;
    }
    management
        .webhook_service_name
        .get_or_insert_with(|| DEFAULT_WEBHOOK_SERVICE_NAME.to_owned());
    management
        .webhook_secret_name
        .get_or_insert_with(|| DEFAULT_WEBHOOK_SECRET_NAME.to_owned());
}

fn default_client_connection(connection: &mut ClientConnection) {
    connection.qps.get_or_insert(DEFAULT_CLIENT_CONNECTION_QPS);
    connection.burst.get_or_insert(DEFAULT_CLIENT_CONNECTION_BURST);
}

fn fill_if_empty(field: &mut String, default: &str) {
    if field.is_empty() {
        default.clone_into(field);
    }
}

fn fill_duration(field: &mut Duration, default: Duration) {
    if field.is_zero() {
        *field = default;
    }
}
