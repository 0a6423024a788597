use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use lws_config::SchemaRegistry;
use lws_manager::{
    FileConfigLoader, ManagerArgs, StructuredHealthReporter, TelemetryError, bootstrap_with,
    initialise_telemetry,
};

fn main() -> ExitCode {
    let args = ManagerArgs::parse();

    if let Err(error) = initialise_telemetry(&args.telemetry_settings()) {
        report_telemetry_failure(&error);
        return ExitCode::FAILURE;
    }

    let registry = SchemaRegistry::new();
    let loader = FileConfigLoader::new(args.config.clone());
    let reporter = Arc::new(StructuredHealthReporter::new());

    // Bootstrap failures are already logged by the health reporter.
    match bootstrap_with(&loader, &registry, reporter) {
        Ok(manager) => {
            tracing::debug!(
                target: "lws_manager::bootstrap",
                options = ?manager.options(),
                "runtime options ready"
            );
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

// No subscriber is installed yet, so stderr is the only sink left.
fn report_telemetry_failure(error: &TelemetryError) {
    writeln!(io::stderr().lock(), "lws-manager: {error}").ok();
}
