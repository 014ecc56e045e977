use std::{error::Error as StdError, fmt, io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Boxed error returned by remote log sources.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors raised while decoding startup settings. Always fatal.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The environment could not be collected or deserialized.
    #[error("Failed to load settings from environment: {source}")]
    Load {
        #[source]
        source: ConfigLoaderError,
    },
    /// A time bound was not a valid RFC3339 timestamp.
    #[error("Environment variable {field} has invalid RFC3339 time `{value}`: {source}")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("START_TIME ({start}) is later than END_TIME ({end})")]
    InvalidTimeRange { start: String, end: String },
    #[error("Environment variable {field} has invalid boolean `{value}`")]
    InvalidBool { field: &'static str, value: String },
    /// A recognised variable carried a value that is not valid UTF-8.
    #[error("Environment variable {name} is not valid unicode")]
    NonUnicode { name: &'static str },
}

/// Which shared AWS file a profile lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFileKind {
    Config,
    Credentials,
}

impl ProfileFileKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProfileFileKind::Config => "config",
            ProfileFileKind::Credentials => "credentials",
        }
    }
}

impl fmt::Display for ProfileFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures while resolving a profile from the shared AWS files.
///
/// These never abort a run: the caller falls back to the ambient session.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Neither an override nor a home directory was available.
    #[error("Unable to resolve the shared {kind} file path")]
    UnresolvablePath { kind: ProfileFileKind },
    #[error("Failed to load shared {kind} file {path}: {source}")]
    Load {
        kind: ProfileFileKind,
        path: PathBuf,
        #[source]
        source: ini::Error,
    },
    #[error("Section `profile {profile}` not found in {path}")]
    SectionNotFound { profile: String, path: PathBuf },
}

/// Fatal errors raised by the log paginator.
#[derive(Debug, Error)]
pub enum LogsError {
    #[error("GetLogEvents failed: {source}")]
    Remote {
        #[source]
        source: BoxError,
    },
    #[error("Failed to write log event: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl LogsError {
    pub fn remote(source: impl Into<BoxError>) -> Self {
        Self::Remote {
            source: source.into(),
        }
    }
}

impl From<io::Error> for LogsError {
    fn from(source: io::Error) -> Self {
        Self::Output { source }
    }
}
