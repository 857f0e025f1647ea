use chrono::{DateTime, FixedOffset};

/// A parsed `YYYY-MM-DD HH:MM:SS ±HHMM` line.
///
/// `DateLine` keeps both the raw textual representation (`text`) and the
/// parsed value as a `DateTime<FixedOffset>` (`value`). Unlike a naive
/// timestamp, the offset anchors the wall-clock fields to an absolute
/// instant, so `timestamp()` is well defined.
///
/// # Fields
/// - `text`: The input line with its line terminator removed
///   (e.g., `"2021-06-15 13:45:30 +0100"`).
/// - `value`: The parsed instant together with its UTC offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DateLine {
    pub text: String,
    pub value: DateTime<FixedOffset>,
}

impl DateLine {
    /// Whole seconds since 1970-01-01T00:00:00Z, negative before the epoch.
    pub fn timestamp(&self) -> i64 {
        self.value.timestamp()
    }

    /// Offset east of UTC, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.value.offset().local_minus_utc()
    }
}
