//! Load and validate settings decoded from the process environment.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use chrono::{DateTime, FixedOffset};
use config::{Config, Environment};
use serde::Deserialize;
use tracing::error;

use crate::lib::{errors::SettingsError, paths::resolve_file_path};

pub mod telemetry;
pub mod time;

pub use time::{parse_time_bound, to_epoch_millis, validate_range};

/// Profile used when neither `AWS_DEFAULT_PROFILE` nor `AWS_PROFILE` is set.
pub const DEFAULT_PROFILE: &str = "default";
/// Shared config file location relative to the home directory.
pub const CONFIG_RELATIVE_PATH: &str = ".aws/config";
/// Shared credentials file location relative to the home directory.
pub const CREDENTIALS_RELATIVE_PATH: &str = ".aws/credentials";

/// Variables read from the process environment. Everything else is ignored.
pub const ENV_VARS: [&str; 12] = [
    "AWS_SHARED_CREDENTIALS_FILE",
    "AWS_CONFIG_FILE",
    "AWS_DEFAULT_PROFILE",
    "AWS_PROFILE",
    "AWS_DEFAULT_REGION",
    "HOME",
    "PRINT_TIME",
    "START_TIME",
    "END_TIME",
    "START_FROM_HEAD",
    "LOG_GROUP",
    "LOG_STREAM",
];

/// Resolved, immutable run settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub credentials_file: Option<String>,
    pub config_file: Option<String>,
    pub default_profile: Option<String>,
    pub profile: Option<String>,
    pub default_region: Option<String>,
    pub home: Option<PathBuf>,
    pub print_time: bool,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub start_from_head: Option<bool>,
    pub log_group: String,
    pub log_stream: String,
}

/// Environment variables as collected by `config::Environment` (lowercased keys).
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    aws_shared_credentials_file: Option<String>,
    aws_config_file: Option<String>,
    aws_default_profile: Option<String>,
    aws_profile: Option<String>,
    aws_default_region: Option<String>,
    home: Option<String>,
    print_time: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    start_from_head: Option<String>,
    log_group: Option<String>,
    log_stream: Option<String>,
}

impl Settings {
    /// Decode settings from the process environment, falling back to the
    /// platform home directory when `HOME` is unset.
    pub fn load_from_env() -> Result<Self, SettingsError> {
        let source = collect_env(std::env::vars_os())?;
        Self::load(Environment::default().source(Some(source)), dirs::home_dir)
    }

    /// Decode settings from an explicit variable map without any home fallback.
    pub fn load_from_vars<I, K, V>(vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(Environment::default().source(Some(source)), || None)
    }

    fn load(
        environment: Environment,
        fallback_home: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        let raw: RawSettings = Config::builder()
            .add_source(environment.ignore_empty(true))
            .build()
            .and_then(|document| document.try_deserialize())
            .map_err(|source| {
                let error = SettingsError::Load { source };
                error!(
                    target: "getawslog::settings",
                    reason = %error,
                    "Failed to decode environment"
                );
                error
            })?;

        let settings = Self::from_raw(raw, fallback_home)?;
        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    fn from_raw(
        raw: RawSettings,
        fallback_home: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        let start_time = parse_time_bound("START_TIME", raw.start_time)?;
        let end_time = parse_time_bound("END_TIME", raw.end_time)?;
        validate_range(start_time.as_ref(), end_time.as_ref())?;

        let home = match non_empty(raw.home) {
            Some(home) => {
                telemetry::log_home_source(true);
                Some(PathBuf::from(home))
            }
            None => {
                telemetry::log_home_source(false);
                fallback_home()
            }
        };

        Ok(Self {
            credentials_file: non_empty(raw.aws_shared_credentials_file),
            config_file: non_empty(raw.aws_config_file),
            default_profile: non_empty(raw.aws_default_profile),
            profile: non_empty(raw.aws_profile),
            default_region: non_empty(raw.aws_default_region),
            home,
            print_time: parse_bool("PRINT_TIME", raw.print_time)?.unwrap_or(false),
            start_time,
            end_time,
            start_from_head: parse_bool("START_FROM_HEAD", raw.start_from_head)?,
            log_group: raw.log_group.unwrap_or_default(),
            log_stream: raw.log_stream.unwrap_or_default(),
        })
    }

    /// Profile name in the order: `AWS_DEFAULT_PROFILE` → `AWS_PROFILE` → `default`.
    pub fn effective_profile(&self) -> &str {
        self.default_profile
            .as_deref()
            .or(self.profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Location of the shared config file, if resolvable.
    pub fn config_path(&self) -> Option<PathBuf> {
        resolve_file_path(
            self.config_file.as_deref(),
            CONFIG_RELATIVE_PATH,
            self.home_dir(),
        )
    }

    /// Location of the shared credentials file, if resolvable.
    pub fn credentials_path(&self) -> Option<PathBuf> {
        resolve_file_path(
            self.credentials_file.as_deref(),
            CREDENTIALS_RELATIVE_PATH,
            self.home_dir(),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Keep the recognised variables of `vars`.
///
/// Unrelated variables are skipped whatever their encoding; a recognised
/// one that is not valid UTF-8 is an error.
pub fn collect_env<I>(vars: I) -> Result<config::Map<String, String>, SettingsError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut source = config::Map::new();
    for (key, value) in vars {
        let Some(name) = key.to_str().and_then(|key| ENV_VARS.into_iter().find(|n| *n == key))
        else {
            continue;
        };
        let value = value
            .into_string()
            .map_err(|_| SettingsError::NonUnicode { name })?;
        source.insert(name.to_string(), value);
    }
    Ok(source)
}

/// Boolean spellings: `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_bool(field: &'static str, value: Option<String>) -> Result<Option<bool>, SettingsError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Some(true)),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Some(false)),
        _ => Err(SettingsError::InvalidBool { field, value }),
    }
}
