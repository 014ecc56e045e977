//! Tracing initialization and structured run events.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset; stdout is reserved for log lines.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and send developer logs to stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing what a run is about to fetch.
#[derive(Debug)]
pub struct RunTelemetry<'a> {
    pub log_group: &'a str,
    pub log_stream: &'a str,
    pub profile: &'a str,
    pub session: &'a str,
    pub print_time: bool,
}

/// Emit the run parameters to `tracing`.
pub fn emit_run_started(telemetry: &RunTelemetry<'_>) {
    info!(
        target: "getawslog::runtime",
        log_group = telemetry.log_group,
        log_stream = telemetry.log_stream,
        profile = telemetry.profile,
        session = telemetry.session,
        print_time = telemetry.print_time,
        "Fetching log events"
    );
}

/// Emit the totals of a finished run.
pub fn emit_run_finished(pages: usize, events: usize) {
    info!(
        target: "getawslog::runtime",
        pages,
        events,
        "Reached end of log stream"
    );
}
