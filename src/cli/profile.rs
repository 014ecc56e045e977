//! LaunchProfile, flag overrides, and the version banner.
use std::{env, path::Path};

use anyhow::{bail, Result};

use super::LaunchArgs;
use crate::settings::Settings;

const FALLBACK_PROGRAM_NAME: &str = "getawslog";

/// Crate version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Commit hash injected at build time through `GETAWSLOG_COMMIT`.
pub const COMMIT: &str = match option_env!("GETAWSLOG_COMMIT") {
    Some(commit) => commit,
    None => "none",
};
/// Build date injected at build time through `GETAWSLOG_BUILD_DATE`.
pub const BUILD_DATE: &str = match option_env!("GETAWSLOG_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub settings: Settings,
    pub launch_args: Vec<String>,
}

/// Apply CLI flags on top of environment settings. Non-empty flags win.
pub fn apply_overrides(mut settings: Settings, args: &LaunchArgs) -> Result<Settings> {
    if let Some(group) = args.log_group.as_deref().filter(|v| !v.is_empty()) {
        settings.log_group = group.to_string();
    }
    if let Some(stream) = args.log_stream.as_deref().filter(|v| !v.is_empty()) {
        settings.log_stream = stream.to_string();
    }
    if args.print_time {
        settings.print_time = true;
    }
    if args.from_head {
        settings.start_from_head = Some(true);
    }

    if settings.log_group.is_empty() {
        bail!("a log group is required: pass -g or set LOG_GROUP");
    }
    if settings.log_stream.is_empty() {
        bail!("a log stream is required: pass -s or set LOG_STREAM");
    }
    Ok(settings)
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(args: &LaunchArgs) -> Vec<String> {
    let mut launch_args = Vec::new();
    if let Some(group) = &args.log_group {
        launch_args.push(format!("--group={group}"));
    }
    if let Some(stream) = &args.log_stream {
        launch_args.push(format!("--stream={stream}"));
    }
    if args.print_time {
        launch_args.push("--print-time".to_string());
    }
    if args.from_head {
        launch_args.push("--from-head".to_string());
    }
    launch_args
}

/// `<program-name> version <version>, commit <commit>, built at <date>`.
pub fn version_banner(program: &str) -> String {
    format!("{program} version {VERSION}, commit {COMMIT}, built at {BUILD_DATE}")
}

/// Base name of the running executable.
pub fn program_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())
}
