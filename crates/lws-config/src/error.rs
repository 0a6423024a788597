//! Error types for configuration loading and encoding.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::load`], [`crate::encode`], and the
/// [`crate::SchemaRegistry`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("{operation} {}: {source}", .path.display())]
    Io {
        /// Filesystem operation that failed.
        operation: &'static str,
        /// Path handed to the loader.
        path: PathBuf,
        /// Underlying error reported by the operating system.
        #[source]
        source: io::Error,
    },
    /// The document declared a version or kind the registry does not know.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The document contained fields outside the declared shape.
    #[error("strict decoding error: {}", unknown_fields_message(.fields))]
    UnknownFields {
        /// Dotted paths of every unrecognised field, in key order.
        fields: Vec<String>,
    },
    /// The document could not be parsed into a configuration.
    #[error("failed to decode configuration: {message}")]
    Decode {
        /// Parser or type mismatch description.
        message: String,
    },
    /// A configuration value could not be rendered as YAML.
    #[error("failed to encode configuration: {message}")]
    Serialization {
        /// Serializer failure description.
        message: String,
    },
}

impl ConfigError {
    /// Creates a new `Io` error for a failed read of `path`.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation: "read",
            path: path.into(),
            source,
        }
    }

    /// Creates a new `Decode` error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a new `Serialization` error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Errors raised while checking the document's declared identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The document has no `apiVersion` field.
    #[error("configuration document is missing 'apiVersion'")]
    MissingApiVersion,
    /// The document has no `kind` field.
    #[error("configuration document is missing 'kind'")]
    MissingKind,
    /// The declared version and kind pair is not registered.
    #[error("no kind \"{kind}\" is registered for version \"{api_version}\"")]
    Unrecognized {
        /// Declared `apiVersion`.
        api_version: String,
        /// Declared `kind`.
        kind: String,
    },
}

fn unknown_fields_message(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("unknown field \"{field}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
