//! Display formatting shared by the views

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Shown for a timestamp the backend did not send
pub const NEVER: &str = "Never";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Renders a backend timestamp in the viewer's local time.
pub fn format_timestamp(value: Option<&str>) -> String {
    format_timestamp_in(value, &Local)
}

/// Renders a backend timestamp in `tz`. Absent or empty values render as
/// `Never`; values that do not parse are shown as sent.
pub fn format_timestamp_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NEVER.to_string();
    };

    match parse_timestamp(raw) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Offset-less ISO strings are taken as UTC
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `<origin>/<code>` as seen by someone sharing the link
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), code)
}
