//! Request cursor and page types exchanged with a log source.

use crate::settings::{to_epoch_millis, Settings};

/// Cursor over one log stream; `next_token` advances once per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEventsRequest {
    pub log_group_name: String,
    pub log_stream_name: String,
    pub next_token: Option<String>,
    /// Inclusive lower bound in epoch milliseconds.
    pub start_time: Option<i64>,
    /// Exclusive upper bound in epoch milliseconds.
    pub end_time: Option<i64>,
    pub start_from_head: Option<bool>,
}

impl LogEventsRequest {
    pub fn new(log_group_name: impl Into<String>, log_stream_name: impl Into<String>) -> Self {
        Self {
            log_group_name: log_group_name.into(),
            log_stream_name: log_stream_name.into(),
            ..Self::default()
        }
    }

    /// Initial request for the stream named in `settings`, starting with no cursor.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            log_group_name: settings.log_group.clone(),
            log_stream_name: settings.log_stream.clone(),
            next_token: None,
            start_time: settings.start_time.as_ref().map(to_epoch_millis),
            end_time: settings.end_time.as_ref().map(to_epoch_millis),
            start_from_head: settings.start_from_head,
        }
    }
}

/// One log line; `timestamp` is in whole Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: i64,
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// A single page returned by the log source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEventsPage {
    pub events: Vec<LogEvent>,
    pub next_forward_token: Option<String>,
}
