/// chrono pattern for `YYYY-MM-DD HH:MM:SS ±HHMM`.
pub const DATE_LINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layout template, one byte per column.
///
/// `D` is an ASCII digit, `S` is the offset sign (`+` or `-`), every other
/// byte must appear literally.
pub const DATE_LINE_LAYOUT: &str = "DDDD-DD-DD DD:DD:DD SDDDD";

/// Exact byte length of an accepted line.
pub const DATE_LINE_LEN: usize = DATE_LINE_LAYOUT.len();
