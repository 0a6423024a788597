//! Test suites for the manager bootstrap.

mod behaviour;
mod support;
