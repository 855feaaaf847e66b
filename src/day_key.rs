//! Calendar-day keys for grouping samples by local day
//!
//! A key identifies the local calendar date of a Unix timestamp once a UTC
//! offset has been applied. Two timestamps share a key exactly when they fall
//! on the same local date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Returns the local calendar date of `timestamp` under `utc_offset_seconds`.
///
/// Timestamps outside chrono's representable range resolve to the Unix epoch
/// date rather than failing.
pub fn local_date(timestamp: i64, utc_offset_seconds: i64) -> NaiveDate {
    let shifted = timestamp.saturating_add(utc_offset_seconds);
    DateTime::<Utc>::from_timestamp(shifted, 0)
        .unwrap_or_default()
        .date_naive()
}

/// Derives the day key (`YYYY-MM-DD`) for a timestamp under a UTC offset.
///
/// # Arguments
/// * `timestamp` - Seconds since the Unix epoch, UTC
/// * `utc_offset_seconds` - Offset of local time from UTC; 0 when unknown
///
/// # Example
///
/// ```
/// use skycast::day_key::day_key;
///
/// // 2024-07-15 03:00 UTC is still July 14th in UTC-5
/// assert_eq!(day_key(1_721_012_400, 0), "2024-07-15");
/// assert_eq!(day_key(1_721_012_400, -18_000), "2024-07-14");
/// ```
pub fn day_key(timestamp: i64, utc_offset_seconds: i64) -> String {
    let date = local_date(timestamp, utc_offset_seconds);
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
