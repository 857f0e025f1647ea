use chrono::{DateTime, Datelike, Utc};

use crate::constants::DATE_LINE_FORMAT;

/// Formats a Unix timestamp as a UTC date line (`YYYY-MM-DD HH:MM:SS +0000`).
///
/// Returns `None` when the instant falls outside years `0001..=9999`, which
/// the four-digit year field cannot express. For every timestamp that does
/// format, `parse::from_str` on the result gives the timestamp back.
pub fn to_date_line(timestamp: i64) -> Option<String> {
    let value: DateTime<Utc> = DateTime::from_timestamp(timestamp, 0)?;
    if !(1..=9999).contains(&value.year()) {
        return None;
    }
    Some(value.format(DATE_LINE_FORMAT).to_string())
}
