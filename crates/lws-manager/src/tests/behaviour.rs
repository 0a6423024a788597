//! Behavioural tests for the manager bootstrap sequence.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use lws_config::SchemaRegistry;

use super::support::{self, HealthEvent, StepResult, TestWorld};

const IDENTITY: &str = "apiVersion: config.lws.x-k8s.io/v1alpha1\nkind: Configuration\n";

#[fixture]
fn world() -> RefCell<TestWorld> {
    support::world()
}

#[given("no configuration file")]
fn given_no_configuration_file(world: &RefCell<TestWorld>) {
    let _ = world;
}

#[given("a configuration file setting the webhook port to {port}")]
fn given_webhook_port(world: &RefCell<TestWorld>, port: String) -> StepResult {
    let number = parse_port(&port)?;
    world
        .borrow_mut()
        .use_document(&format!("{IDENTITY}webhook:\n  port: {number}\n"));
    Ok(())
}

#[given("a configuration file with an unknown field {field}")]
fn given_unknown_field(world: &RefCell<TestWorld>, field: String) {
    world
        .borrow_mut()
        .use_document(&format!("{IDENTITY}{field}: invalidValue\n"));
}

#[given("an unreadable configuration path")]
fn given_unreadable_path(world: &RefCell<TestWorld>) {
    world.borrow_mut().use_failing_loader();
}

#[when("the manager bootstrap runs")]
fn when_bootstrap_runs(world: &RefCell<TestWorld>) {
    world.borrow_mut().bootstrap();
}

#[then("bootstrap succeeds")]
fn then_bootstrap_succeeds(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    assert!(
        world.bootstrap_error().is_none(),
        "bootstrap error: {:?}",
        world.bootstrap_error()
    );
    assert!(world.manager().is_some(), "manager should have been created");
}

#[then("bootstrap fails")]
fn then_bootstrap_fails(world: &RefCell<TestWorld>) {
    assert!(
        world.borrow().bootstrap_error().is_some(),
        "bootstrap succeeded unexpectedly"
    );
}

#[then("no manager was created")]
fn then_no_manager(world: &RefCell<TestWorld>) {
    assert!(world.borrow().manager().is_none());
}

#[then("the webhook server listens on port {port}")]
fn then_webhook_port(world: &RefCell<TestWorld>, port: String) -> StepResult {
    let expected = parse_port(&port)?;
    let world = world.borrow();
    let manager = world.manager().ok_or("manager missing")?;
    let actual = manager
        .options()
        .webhook_server
        .as_ref()
        .map(|server| server.port);
    if actual == Some(expected) {
        Ok(())
    } else {
        Err(format!("expected webhook port {expected}, got {actual:?}"))
    }
}

#[then("leader election is enabled")]
fn then_leader_election_enabled(world: &RefCell<TestWorld>) -> StepResult {
    let world = world.borrow();
    let manager = world.manager().ok_or("manager missing")?;
    if manager.options().leader_election {
        Ok(())
    } else {
        Err("leader election should default to enabled".to_owned())
    }
}

#[then("the logged configuration sets the webhook port to {port}")]
fn then_logged_port(world: &RefCell<TestWorld>, port: String) -> StepResult {
    let expected = parse_port(&port)?;
    let events = world.borrow().reporter.events();
    let logged = events
        .iter()
        .find_map(|event| match event {
            HealthEvent::BootstrapSucceeded(config) => Some(config.clone()),
            _ => None,
        })
        .ok_or_else(|| format!("bootstrap success event missing: {events:?}"))?;
    let decoded = SchemaRegistry::new()
        .decode(logged.as_bytes())
        .map_err(|error| format!("logged configuration did not decode: {error}"))?;
    if decoded.webhook.port == Some(expected) {
        Ok(())
    } else {
        Err(format!(
            "logged webhook port was {:?}, expected {expected}",
            decoded.webhook.port
        ))
    }
}

#[then("the bootstrap error names the field {field}")]
fn then_error_names_field(world: &RefCell<TestWorld>, field: String) -> StepResult {
    let world = world.borrow();
    let error = world.bootstrap_error().ok_or("bootstrap error missing")?;
    let message = error.to_string();
    if message.contains(&format!("unknown field \"{field}\"")) {
        Ok(())
    } else {
        Err(format!("error does not name {field}: {message}"))
    }
}

#[then("the reporter recorded bootstrap start")]
fn then_reporter_start(world: &RefCell<TestWorld>) {
    assert!(
        world
            .borrow()
            .reporter
            .events()
            .contains(&HealthEvent::BootstrapStarting),
        "bootstrap start event missing"
    );
}

#[then("the reporter recorded bootstrap success")]
fn then_reporter_success(world: &RefCell<TestWorld>) {
    let events = world.borrow().reporter.events();
    let succeeded = events
        .iter()
        .any(|event| matches!(event, HealthEvent::BootstrapSucceeded(_)));
    assert!(succeeded, "bootstrap success event missing: {events:?}");
}

#[then("the reporter recorded bootstrap failure")]
fn then_reporter_failure(world: &RefCell<TestWorld>) {
    let events = world.borrow().reporter.events();
    let failed = events
        .iter()
        .any(|event| matches!(event, HealthEvent::BootstrapFailed(_)));
    assert!(failed, "bootstrap failure event missing: {events:?}");
}

#[scenario(path = "tests/features/bootstrap_defaults.feature")]
fn bootstrap_defaults(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(path = "tests/features/bootstrap_overrides.feature")]
fn bootstrap_overrides(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(path = "tests/features/bootstrap_failure.feature")]
fn bootstrap_failure(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(path = "tests/features/bootstrap_strict.feature")]
fn bootstrap_strict(world: RefCell<TestWorld>) {
    let _ = world;
}

fn parse_port(text: &str) -> Result<u16, String> {
    text.parse::<u16>()
        .map_err(|error| format!("invalid port '{text}': {error}"))
}
