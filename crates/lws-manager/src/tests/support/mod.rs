//! Test harness utilities for the manager bootstrap suites.

mod config_loader;
mod reporter;
mod world;

pub use config_loader::{DocumentConfigLoader, FailingConfigLoader};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use world::{StepResult, TestWorld, world};
