//! Log sources: the seam between the paginator and the remote service.
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::{self as cloudwatchlogs, error::DisplayErrorContext};
use tracing::debug;

use super::request::{LogEvent, LogEventsPage, LogEventsRequest};
use crate::lib::errors::LogsError;

/// Anything that can return one page of log events for a request.
#[async_trait]
pub trait LogEventSource {
    async fn get_log_events(&self, request: &LogEventsRequest) -> Result<LogEventsPage, LogsError>;
}

/// `GetLogEvents` against CloudWatch Logs.
#[derive(Debug, Clone)]
pub struct CloudWatchLogSource {
    client: cloudwatchlogs::Client,
}

impl CloudWatchLogSource {
    pub fn new(client: cloudwatchlogs::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(cloudwatchlogs::Client::new(config))
    }
}

#[async_trait]
impl LogEventSource for CloudWatchLogSource {
    async fn get_log_events(
        &self,
        request: &LogEventsRequest,
    ) -> Result<LogEventsPage, LogsError> {
        debug!(
            target: "getawslog::logs",
            log_group = %request.log_group_name,
            log_stream = %request.log_stream_name,
            next_token = request.next_token.as_deref().unwrap_or(""),
            "Calling GetLogEvents"
        );

        let response = self
            .client
            .get_log_events()
            .log_group_name(&request.log_group_name)
            .log_stream_name(&request.log_stream_name)
            .set_next_token(request.next_token.clone())
            .set_start_time(request.start_time)
            .set_end_time(request.end_time)
            .set_start_from_head(request.start_from_head)
            .send()
            .await
            .map_err(|err| LogsError::remote(DisplayErrorContext(err).to_string()))?;

        let events = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| {
                LogEvent::new(
                    millis_to_seconds(event.timestamp.unwrap_or(0)),
                    event.message.unwrap_or_default(),
                )
            })
            .collect();

        Ok(LogEventsPage {
            events,
            next_forward_token: response.next_forward_token,
        })
    }
}

/// CloudWatch reports event times in epoch milliseconds.
fn millis_to_seconds(millis: i64) -> i64 {
    millis.div_euclid(1000)
}
