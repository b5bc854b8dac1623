//! Timestamp helpers for record metadata.

use chrono::{DateTime, Local, TimeZone};

/// Day-first layout written into records, e.g. `19-10-2026 14:03:59`.
pub const RECORD_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub fn format_record_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(RECORD_DATE_FORMAT).to_string()
}

/// Current local time in `RECORD_DATE_FORMAT`.
pub fn now_record_date() -> String {
    format_record_date(&Local::now())
}
