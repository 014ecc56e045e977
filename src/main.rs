//! Entry point for getawslog.
use std::process::ExitCode;

use getawslog::{
    cli::{program_name, version_banner, LaunchArgs, ParsedCommand},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse_os_args();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Version => {
            println!("{}", version_banner(&program_name()));
            Ok(())
        }
        ParsedCommand::Fetch(profile) => runtime::run(profile).await,
    }
}
