//! Date-time helpers shared by the store and the CLI renderers.

use chrono::{Local, NaiveDateTime};

/// Storage format for `in_time` / `out_time` columns (ISO-8601 local,
/// no timezone suffix).
pub const DB_DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

/// Short human format used in tables and messages.
pub const DISPLAY_DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

pub fn format_db_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DB_DATETIME_FMT).to_string()
}

pub fn parse_db_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, DB_DATETIME_FMT) {
        return Some(dt);
    }
    // Tolerate values written with sub-second precision.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

pub fn display_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_DATETIME_FMT).to_string()
}

/// Current wall-clock time, truncated to whole seconds so round trips
/// through the TEXT columns are lossless.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    let formatted = now.format(DB_DATETIME_FMT).to_string();
    NaiveDateTime::parse_from_str(&formatted, DB_DATETIME_FMT).unwrap_or(now)
}
