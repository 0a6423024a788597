//! Startup configuration for the LeaderWorkerSet controller manager.
//!
//! The crate turns an optional `config.lws.x-k8s.io/v1alpha1` YAML document
//! into two values: a fully defaulted [`Configuration`] and the flatter
//! [`RuntimeOptions`] that a process bootstrapper hands to the manager
//! runtime. The reverse path, [`encode`], renders a configuration back into
//! canonical YAML so the effective settings can be logged or stored.
//!
//! # Pipeline
//!
//! ```text
//! path (optional)
//!     → load() reads the file
//!     → SchemaRegistry::decode (identity check, strict field walk, typed decode)
//!     → SchemaRegistry::default_configuration
//!     → RuntimeOptions::from_configuration
//! ```
//!
//! The [`SchemaRegistry`] is built once by the caller and passed into every
//! call. Nothing in this crate keeps process-wide state, logs, or retries;
//! every failure surfaces as a [`ConfigError`].
//!
//! # Example
//!
//! ```ignore
//! use lws_config::{SchemaRegistry, encode, load};
//!
//! let registry = SchemaRegistry::new();
//! let (options, config) = load(&registry, Some(path))?;
//! let effective = encode(&registry, &config)?;
//! ```

mod api;
mod defaults;
mod duration;
mod error;
mod loader;
mod options;
mod registry;
mod schema;

pub use api::{
    ClientConnection, Configuration, ControllerHealth, ControllerMetrics, ControllerWebhook,
    InternalCertManagement, LeaderElectionConfiguration,
};
pub use defaults::{
    DEFAULT_CLIENT_CONNECTION_BURST, DEFAULT_CLIENT_CONNECTION_QPS,
    DEFAULT_HEALTH_PROBE_BIND_ADDRESS, DEFAULT_LEADER_ELECTION_ID,
    DEFAULT_LEADER_ELECTION_LEASE_DURATION, DEFAULT_LEADER_ELECTION_RENEW_DEADLINE,
    DEFAULT_LEADER_ELECTION_RETRY_PERIOD, DEFAULT_LIVENESS_ENDPOINT, DEFAULT_METRICS_BIND_ADDRESS,
    DEFAULT_READINESS_ENDPOINT, DEFAULT_RESOURCE_LOCK, DEFAULT_WEBHOOK_CERT_DIR,
    DEFAULT_WEBHOOK_PORT, DEFAULT_WEBHOOK_SECRET_NAME, DEFAULT_WEBHOOK_SERVICE_NAME,
};
pub use error::{ConfigError, SchemaError};
pub use loader::{encode, load};
pub use options::{LEASES_RESOURCE_LOCK, MetricsServerOptions, RuntimeOptions, WebhookServerOptions};
pub use registry::{CONFIGURATION_KIND, GROUP_VERSION, SchemaRegistry};
