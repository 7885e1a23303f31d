//! Conversions between timestamps and ISO 8601 date-times.
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use service_health_primitives::DurationSinceUnixEpoch;

/// It converts a timestamp to an ISO 8601 string in UTC with millisecond
/// precision, for example `1970-01-01T00:00:00.000Z` for the Unix Epoch.
///
/// Timestamps that do not fit into a `DateTime<Utc>` (hundreds of billions
/// of years from now) are clamped to the maximum representable date-time.
#[must_use]
pub fn convert_from_timestamp_to_iso_8601(duration: DurationSinceUnixEpoch) -> String {
    convert_from_timestamp_to_datetime_utc(duration).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// It converts a timestamp to a `DateTime::<Utc>`.
#[must_use]
pub fn convert_from_timestamp_to_datetime_utc(duration: DurationSinceUnixEpoch) -> DateTime<Utc> {
    i64::try_from(duration.as_secs())
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, duration.subsec_nanos()))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// It converts a string in ISO 8601 format to a timestamp.
///
/// # Errors
///
/// Will return an error if the input is not a valid date-time, or if it's
/// before the Unix Epoch.
pub fn convert_from_iso_8601_to_timestamp(iso_8601: &str) -> Result<DurationSinceUnixEpoch, chrono::ParseError> {
    let datetime = DateTime::<Utc>::from_str(iso_8601)?;

    Ok(convert_from_datetime_utc_to_timestamp(&datetime))
}

/// It converts a `DateTime::<Utc>` to a timestamp. Date-times before the
/// Unix Epoch are converted to `ZERO`.
#[must_use]
pub fn convert_from_datetime_utc_to_timestamp(datetime_utc: &DateTime<Utc>) -> DurationSinceUnixEpoch {
    let secs = u64::try_from(datetime_utc.timestamp()).unwrap_or_default();

    DurationSinceUnixEpoch::new(secs, datetime_utc.timestamp_subsec_nanos())
}
