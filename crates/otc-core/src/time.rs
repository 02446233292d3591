//! Fixed display offsets and timestamp normalization.
//!
//! The remote system logs status changes in a different civil time than the
//! one operators read the timeline in. Conversion uses literal hour offsets,
//! not a timezone database:
//!
//! | Offset | Applied to |
//! |--------|------------|
//! | −2h    | source timestamps → primary display time |
//! | −1h    | primary display time → secondary (hover) time |
//! | −5h    | the evaluation instant (UTC) → display "now" |
//!
//! All display values are naive wall-clock times with whole-second precision.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Timelike, Utc};

/// Hours added to a source timestamp to obtain the primary display time.
pub const SOURCE_OFFSET_HOURS: i64 = -2;

/// Hours added to the primary display time for the secondary hover time.
pub const SECONDARY_OFFSET_HOURS: i64 = -1;

/// Hours added to the UTC evaluation instant to obtain display "now".
pub const NOW_OFFSET_HOURS: i64 = -5;

/// Full display format for resolved timestamps.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Clock-only format used in hover payloads.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Parse a source timestamp into the wall-clock time it was written in.
///
/// Accepts RFC 3339 (`2024-05-02T12:00:00.123456Z`, `...+00:00`) and naive
/// ISO forms without an offset. Returns `None` for anything else.
#[must_use]
pub fn parse_source_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Shift a source wall-clock time into primary display time, dropping
/// sub-second precision.
#[must_use]
pub fn to_display(source: NaiveDateTime) -> NaiveDateTime {
    let shifted = source + TimeDelta::hours(SOURCE_OFFSET_HOURS);
    shifted.with_nanosecond(0).unwrap_or(shifted)
}

/// Secondary display time shown next to the primary one in hover payloads.
#[must_use]
pub fn secondary_display(primary: NaiveDateTime) -> NaiveDateTime {
    primary + TimeDelta::hours(SECONDARY_OFFSET_HOURS)
}

/// Display "now" for an evaluation instant.
#[must_use]
pub fn display_now(now: DateTime<Utc>) -> NaiveDateTime {
    let shifted = now.naive_utc() + TimeDelta::hours(NOW_OFFSET_HOURS);
    shifted.with_nanosecond(0).unwrap_or(shifted)
}
