use std::{io, process::ExitCode};

use anyhow::Error;

use crate::{
    cli::LaunchProfile,
    credentials::{resolve_session, AwsSessionBuilder},
    lib::telemetry::{emit_run_finished, emit_run_started, RunTelemetry},
    logs::{stream_logs, CloudWatchLogSource, LogEventsRequest, OutputOptions},
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Resolve credentials, then stream the configured log stream to stdout.
pub async fn run(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let settings = &profile.settings;
    let resolved = resolve_session(settings, &AwsSessionBuilder).await;

    emit_run_started(&RunTelemetry {
        log_group: &settings.log_group,
        log_stream: &settings.log_stream,
        profile: &resolved.profile,
        session: resolved.kind.as_str(),
        print_time: settings.print_time,
    });
    tracing::debug!(
        target: "getawslog::runtime",
        launch_args = ?profile.launch_args,
        "Launch arguments"
    );

    let source = CloudWatchLogSource::from_config(&resolved.session);
    let request = LogEventsRequest::from_settings(settings);
    let options = OutputOptions {
        print_time: settings.print_time,
    };

    let mut stdout = io::stdout();
    let summary = stream_logs(&source, &mut stdout, request, options)
        .await
        .map_err(RuntimeExit::from_error)?;
    emit_run_finished(summary.pages, summary.events);
    Ok(())
}
