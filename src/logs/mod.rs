//! Log retrieval: request cursor, remote source, and the pagination loop.
mod paginator;
mod request;
mod source;

pub use paginator::{format_timestamp, render_line, stream_logs, OutputOptions, StreamSummary};
pub use request::{LogEvent, LogEventsPage, LogEventsRequest};
pub use source::{CloudWatchLogSource, LogEventSource};
