//! Registry for the single recognised configuration type.

use serde_json::{Map, Value};

use crate::api::Configuration;
use crate::defaults::apply_defaults;
use crate::error::{ConfigError, SchemaError};
use crate::schema::{CONFIGURATION_FIELDS, unknown_fields};

/// API group and version of the configuration document.
pub const GROUP_VERSION: &str = "config.lws.x-k8s.io/v1alpha1";

/// Kind of the configuration document.
pub const CONFIGURATION_KIND: &str = "Configuration";

/// Knows the configuration type: its identity, defaults, and YAML form.
///
/// Build one at process start and pass it by reference to [`crate::load`] and
/// [`crate::encode`]. The registry holds no mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    group_version: &'static str,
    kind: &'static str,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRegistry {
    /// Builds a registry recognising `config.lws.x-k8s.io/v1alpha1` `Configuration`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            group_version: GROUP_VERSION,
            kind: CONFIGURATION_KIND,
        }
    }

    /// Registered `apiVersion`.
    #[must_use]
    pub const fn group_version(&self) -> &'static str {
        self.group_version
    }

    /// Registered `kind`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns true when the pair names the registered type.
    #[must_use]
    pub fn recognizes(&self, api_version: &str, kind: &str) -> bool {
        api_version == self.group_version && kind == self.kind
    }

    /// Fills every unset field of `config` with its default.
    ///
    /// Idempotent: a defaulted configuration is left unchanged.
    pub fn default_configuration(&self, config: &mut Configuration) {
        apply_defaults(config);
    }

    /// Decodes a YAML document in strict mode without applying defaults.
    ///
    /// A blank document (or one holding only `null`) yields the zero-value
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] when the declared identity is missing or
    /// unregistered, [`ConfigError::UnknownFields`] listing every field outside
    /// the declared shape, and [`ConfigError::Decode`] for malformed YAML,
    /// non-UTF-8 input, or values of the wrong type.
    pub fn decode(&self, bytes: &[u8]) -> Result<Configuration, ConfigError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::decode("configuration must be valid UTF-8"))?;
        if text.trim().is_empty() {
            return Ok(Configuration::default());
        }

        let parsed: Value =
            serde_saphyr::from_str(text).map_err(|error| ConfigError::decode(error.to_string()))?;
        let mut document = match parsed {
            Value::Object(document) => document,
            Value::Null => return Ok(Configuration::default()),
            other => {
                return Err(ConfigError::decode(format!(
                    "expected a mapping at the document root, found {}",
                    value_kind(&other)
                )));
            }
        };

        self.check_identity(&document)?;

        let unknown = unknown_fields(&mut document, CONFIGURATION_FIELDS);
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownFields { fields: unknown });
        }

        serde_json::from_value(Value::Object(document))
            .map_err(|error| ConfigError::decode(error.to_string()))
    }

    /// Renders `config` as canonical YAML.
    ///
    /// The registered `apiVersion` and `kind` are always written. Unset fields
    /// are omitted and keys are emitted in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialization`] when the value cannot be rendered.
    pub fn encode(&self, config: &Configuration) -> Result<String, ConfigError> {
        let stamped = Configuration {
            api_version: self.group_version.to_owned(),
            kind: self.kind.to_owned(),
            ..config.clone()
        };
        let tree = serde_json::to_value(&stamped)
            .map_err(|error| ConfigError::serialization(error.to_string()))?;
        serde_saphyr::to_string(&tree).map_err(|error| ConfigError::serialization(error.to_string()))
    }

    fn check_identity(&self, document: &Map<String, Value>) -> Result<(), ConfigError> {
        let api_version =
            declared_string(document, "apiVersion").ok_or(SchemaError::MissingApiVersion)?;
        let kind = declared_string(document, "kind").ok_or(SchemaError::MissingKind)?;
        if self.recognizes(api_version, kind) {
            Ok(())
        } else {
            Err(SchemaError::Unrecognized {
                api_version: api_version.to_owned(),
                kind: kind.to_owned(),
            }
            .into())
        }
    }
}

fn declared_string<'a>(document: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    document
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
