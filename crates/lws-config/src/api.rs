//! Typed `v1alpha1` configuration document.
//!
//! Every field is optional in the YAML form. Unset values are represented by
//! the empty string, `None`, or a zero [`Duration`] so defaulting can tell
//! "absent" apart from "explicitly set", and so encoding can omit them.

use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

/// Root configuration for the controller manager process.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Schema version declared by the document.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    /// Document kind declared by the document.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Health probe endpoints.
    #[serde(default)]
    pub health: ControllerHealth,
    /// Metrics endpoint.
    #[serde(default)]
    pub metrics: ControllerMetrics,
    /// Leader election parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_election: Option<LeaderElectionConfiguration>,
    /// Webhook server listener.
    #[serde(default)]
    pub webhook: ControllerWebhook,
    /// Automatic provisioning of webhook serving certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_cert_management: Option<InternalCertManagement>,
    /// Throttling for the API client used by the controllers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_connection: Option<ClientConnection>,
    /// Controller manager settings handed to the runtime untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_manager: Option<serde_json::Value>,
}

/// Health probe configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerHealth {
    /// Address the probe server binds to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub health_probe_bind_address: String,
    /// Route serving the readiness probe.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub readiness_endpoint_name: String,
    /// Route serving the liveness probe.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub liveness_endpoint_name: String,
}

/// Metrics endpoint configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerMetrics {
    /// Address the metrics server binds to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bind_address: String,
}

/// Leader election configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderElectionConfiguration {
    /// Whether the manager takes part in leader election.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_elect: Option<bool>,
    /// How long non-leaders wait before trying to acquire leadership.
    #[serde(
        default,
        with = "crate::duration",
        skip_serializing_if = "Duration::is_zero"
    )]
    pub lease_duration: Duration,
    /// How long the leader keeps retrying to refresh before giving up.
    #[serde(
        default,
        with = "crate::duration",
        skip_serializing_if = "Duration::is_zero"
    )]
    pub renew_deadline: Duration,
    /// Pause between acquisition or renewal attempts.
    #[serde(
        default,
        with = "crate::duration",
        skip_serializing_if = "Duration::is_zero"
    )]
    pub retry_period: Duration,
    /// Kind of lock object used for election.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_lock: String,
    /// Name of the lock object.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_name: String,
    /// Namespace of the lock object; empty means the manager's namespace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_namespace: String,
}

/// Webhook server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerWebhook {
    /// Port the webhook server listens on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Host the webhook server binds to; empty means all interfaces.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Directory holding the serving certificate and key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cert_dir: String,
}

/// Internal certificate management for the webhook server.
///
/// The service and secret names only take defaults while management is
/// enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalCertManagement {
    /// Whether certificates are provisioned internally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Service fronting the webhook server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_service_name: Option<String>,
    /// Secret receiving the generated certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret_name: Option<String>,
}

/// API client throttling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConnection {
    /// Sustained queries per second.
    #[serde(
        default,
        serialize_with = "serialize_qps",
        skip_serializing_if = "Option::is_none"
    )]
    pub qps: Option<f32>,
    /// Maximum burst above the sustained rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<i32>,
}

impl InternalCertManagement {
    /// Returns true unless management was explicitly disabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self.enable, Some(false))
    }
}

// Written through the shortest `f32` decimal form: `500` stays `500` and
// `0.1` stays `0.1` instead of its widened `f64` digits.
fn serialize_qps<S>(qps: &Option<f32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let Some(value) = qps else {
        return serializer.serialize_none();
    };
    let text = value.to_string();
    if let Ok(whole) = text.parse::<i64>() {
        serializer.serialize_i64(whole)
    } else if let Ok(decimal) = text.parse::<f64>() {
        serializer.serialize_f64(decimal)
    } else {
        serializer.serialize_f32(*value)
    }
}
