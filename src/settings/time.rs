use chrono::{DateTime, FixedOffset};

use crate::lib::errors::SettingsError;

/// Decode an optional RFC3339 time bound taken from the environment.
pub fn parse_time_bound(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<DateTime<FixedOffset>>, SettingsError> {
    let Some(value) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(value.trim())
        .map(Some)
        .map_err(|source| SettingsError::InvalidTime {
            field,
            value,
            source,
        })
}

/// Reject a start bound that lies after the end bound.
pub fn validate_range(
    start: Option<&DateTime<FixedOffset>>,
    end: Option<&DateTime<FixedOffset>>,
) -> Result<(), SettingsError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(SettingsError::InvalidTimeRange {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        }),
        _ => Ok(()),
    }
}

/// Epoch milliseconds, the unit `GetLogEvents` expects for its bounds.
pub fn to_epoch_millis(time: &DateTime<FixedOffset>) -> i64 {
    time.timestamp_millis()
}
