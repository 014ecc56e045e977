//! Forward pagination over one log stream.
use std::io::Write;

use chrono::{Local, SecondsFormat, TimeZone};
use tracing::debug;

use super::{
    request::{LogEvent, LogEventsRequest},
    source::LogEventSource,
};
use crate::lib::errors::LogsError;

/// Output options for rendered lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub print_time: bool,
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub pages: usize,
    pub events: usize,
}

/// Fetch pages from `source` and write every event to `sink` until the
/// service hands back the token it was given.
///
/// The first request goes out with the cursor `request` was built with. Each
/// page is written before the end-of-data check, so events on the final page
/// are never dropped. A page without a forward token also ends the stream.
pub async fn stream_logs<S, W>(
    source: &S,
    sink: &mut W,
    mut request: LogEventsRequest,
    options: OutputOptions,
) -> Result<StreamSummary, LogsError>
where
    S: LogEventSource + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = StreamSummary::default();
    loop {
        let page = source.get_log_events(&request).await?;
        summary.pages += 1;
        summary.events += page.events.len();

        for event in &page.events {
            sink.write_all(render_line(event, options).as_bytes())?;
        }

        debug!(
            target: "getawslog::logs",
            page = summary.pages,
            events = page.events.len(),
            submitted = request.next_token.as_deref().unwrap_or(""),
            returned = page.next_forward_token.as_deref().unwrap_or(""),
            "Fetched page"
        );

        match page.next_forward_token {
            Some(token) if request.next_token.as_deref() != Some(token.as_str()) => {
                request.next_token = Some(token);
            }
            _ => return Ok(summary),
        }
    }
}

/// Render one output line, `[<RFC3339> ]<message>\n`.
pub fn render_line(event: &LogEvent, options: OutputOptions) -> String {
    if !options.print_time {
        return format!("{}\n", event.message);
    }
    format!("{} {}\n", format_timestamp(event.timestamp), event.message)
}

/// RFC3339 rendering of a Unix timestamp in the local timezone.
pub fn format_timestamp(seconds: i64) -> String {
    match Local.timestamp_opt(seconds, 0).single() {
        Some(time) => time.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => seconds.to_string(),
    }
}
