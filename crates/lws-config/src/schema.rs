//! Declared field shape of the `v1alpha1` document and the strict walk over it.
//!
//! Decoding goes through a generic [`serde_json::Value`] tree first so every
//! unknown key is found in one pass, instead of stopping at the first one as
//! `#[serde(deny_unknown_fields)]` would.

use serde_json::{Map, Value};

/// Shape of one field in the document.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldShape {
    /// Scalar or list; contents are checked by the typed decode.
    Value,
    /// Nested mapping with its own declared fields.
    Section(&'static [Field]),
    /// Mapping passed through verbatim and never inspected.
    Opaque,
}

/// Named field in a section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    name: &'static str,
    shape: FieldShape,
}

impl Field {
    const fn value(name: &'static str) -> Self {
        Self {
            name,
            shape: FieldShape::Value,
        }
    }

    const fn section(name: &'static str, fields: &'static [Self]) -> Self {
        Self {
            name,
            shape: FieldShape::Section(fields),
        }
    }

    const fn opaque(name: &'static str) -> Self {
        Self {
            name,
            shape: FieldShape::Opaque,
        }
    }
}

const HEALTH_FIELDS: &[Field] = &[
    Field::value("healthProbeBindAddress"),
    Field::value("readinessEndpointName"),
    Field::value("livenessEndpointName"),
];

const METRICS_FIELDS: &[Field] = &[Field::value("bindAddress")];

const LEADER_ELECTION_FIELDS: &[Field] = &[
    Field::value("leaderElect"),
    Field::value("leaseDuration"),
    Field::value("renewDeadline"),
    Field::value("retryPeriod"),
    Field::value("resourceLock"),
    Field::value("resourceName"),
    Field::value("resourceNamespace"),
];

const WEBHOOK_FIELDS: &[Field] = &[
    Field::value("port"),
    Field::value("host"),
    Field::value("certDir"),
];

const INTERNAL_CERT_MANAGEMENT_FIELDS: &[Field] = &[
    Field::value("enable"),
    Field::value("webhookServiceName"),
    Field::value("webhookSecretName"),
];

const CLIENT_CONNECTION_FIELDS: &[Field] = &[Field::value("qps"), Field::value("burst")];

/// Top-level fields of a `Configuration` document.
pub(crate) const CONFIGURATION_FIELDS: &[Field] = &[
    Field::value("apiVersion"),
    Field::value("kind"),
    Field::section("health", HEALTH_FIELDS),
    Field::section("metrics", METRICS_FIELDS),
    Field::section("leaderElection", LEADER_ELECTION_FIELDS),
    Field::section("webhook", WEBHOOK_FIELDS),
    Field::section("internalCertManagement", INTERNAL_CERT_MANAGEMENT_FIELDS),
    Field::section("clientConnection", CLIENT_CONNECTION_FIELDS),
    Field::opaque("controllerManager"),
];

/// Walks `document` against `fields` and returns the dotted path of every key
/// outside the declared shape.
///
/// Known keys holding `null` are removed so the typed decode treats them as
/// absent. Opaque sections are left exactly as written.
pub(crate) fn unknown_fields(document: &mut Map<String, Value>, fields: &[Field]) -> Vec<String> {
    let mut unknown = Vec::new();
    walk(document, fields, "", &mut unknown);
    unknown
}

fn walk(document: &mut Map<String, Value>, fields: &[Field], prefix: &str, unknown: &mut Vec<String>) {
    for (key, value) in document.iter_mut() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match lookup(fields, key) {
            None => unknown.push(path),
            Some(FieldShape::Section(nested)) => {
                if let Value::Object(section) = value {
                    walk(section, nested, &path, unknown);
                }
            }
            Some(FieldShape::Value | FieldShape::Opaque) => {}
        }
    }
    document.retain(|key, value| !(value.is_null() && lookup(fields, key).is_some()));
}

fn lookup(fields: &[Field], key: &str) -> Option<FieldShape> {
    fields
        .iter()
        .find(|field| field.name == key)
        .map(|field| field.shape)
}
