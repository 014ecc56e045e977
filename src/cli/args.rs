//! CLI argument definitions and `LaunchProfile` construction.
use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use super::{apply_overrides, build_launch_args, LaunchProfile};
use crate::settings::Settings;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    /// Print the version banner and exit.
    Version,
    /// Fetch and print the log stream.
    Fetch(LaunchProfile),
}

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "getawslog",
    author,
    about = "Print the events of one CloudWatch Logs stream",
    long_about = "Print the events of one CloudWatch Logs stream.\n\nCredentials come from the profile named by AWS_DEFAULT_PROFILE or AWS_PROFILE; profiles with role_arn and source_profile assume that role first.",
    disable_version_flag = true
)]
pub struct LaunchArgs {
    /// LogGroupName (required; overrides LOG_GROUP).
    #[arg(short = 'g', long = "group")]
    pub log_group: Option<String>,
    /// LogStreamName (required; overrides LOG_STREAM).
    #[arg(short = 's', long = "stream")]
    pub log_stream: Option<String>,
    /// Prefix each line with its RFC3339 timestamp (same as PRINT_TIME=true).
    #[arg(short = 't', long = "print-time", default_value_t = false)]
    pub print_time: bool,
    /// Read from the oldest event instead of the newest page.
    #[arg(long = "from-head", default_value_t = false)]
    pub from_head: bool,
    /// Show version information and exit.
    #[arg(short = 'v', long = "version", default_value_t = false)]
    pub version: bool,
}

/// Single-dash spelling of `--version` kept for existing scripts.
const LEGACY_VERSION_FLAG: &str = "-version";

impl LaunchArgs {
    /// Parse the process arguments, accepting `-version` as `--version`.
    pub fn parse_os_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let settings = Settings::load_from_env()?;
        self.build_with(settings)
    }

    /// Build a `LaunchProfile` on top of already decoded settings.
    pub fn build_with(self, settings: Settings) -> Result<LaunchProfile> {
        let launch_args = build_launch_args(&self);
        let settings = apply_overrides(settings, &self)?;
        Ok(LaunchProfile {
            settings,
            launch_args,
        })
    }

    /// Parse CLI args into either the version banner or a fetch run.
    ///
    /// The version flag short-circuits before the environment is decoded.
    pub fn into_command(self) -> Result<ParsedCommand> {
        if self.version {
            return Ok(ParsedCommand::Version);
        }
        Ok(ParsedCommand::Fetch(self.build()?))
    }
}

/// Rewrite a bare `-version` to `--version`; clap would read it as a
/// cluster of short flags.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_VERSION_FLAG {
                OsString::from("--version")
            } else {
                arg
            }
        })
        .collect()
}
