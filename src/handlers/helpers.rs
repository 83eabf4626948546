use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Wire format for booking request times, e.g. `2026-03-01 02:30 PM`.
pub const BOOKING_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Canonical storage format. Fixed-width UTC, so lexicographic order
/// matches chronological order in SQL comparisons.
const DB_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_db(dt: DateTime<Utc>) -> String {
    dt.format(DB_TIME_FORMAT).to_string()
}

pub fn now_db() -> String {
    format_db(Utc::now())
}

/// Parse a booking request time. Naive, read as UTC.
pub fn parse_booking_time(s: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), BOOKING_TIME_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Parse an availability-window bound: RFC 3339 first, then a naive
/// `YYYY-MM-DDTHH:MM:SS` fallback read as UTC.
pub fn parse_window_time(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Some(Utc.from_utc_datetime(&naive))
}
