use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use log::debug;

use crate::constants::{DATE_LINE_FORMAT, DATE_LINE_LAYOUT, DATE_LINE_LEN};
use crate::types::date_line::DateLine;
use crate::types::errors::FormatError;

// Example:
// 2021-06-15 13:45:30 +0100
pub(crate) fn from_line(line: &str) -> Result<DateLine, FormatError> {
    check_layout(line)?;

    // Chrono parsing, the layout check already pinned every field width
    let value: DateTime<FixedOffset> =
        DateTime::parse_from_str(line, DATE_LINE_FORMAT).map_err(|source| FormatError::Parse {
            line: line.to_string(),
            source,
        })?;

    if value.year() == 0 {
        return Err(FormatError::OutOfRange {
            line: line.to_string(),
            reason: "year 0000 does not exist",
        });
    }
    // chrono stores a `:60` second as 59 plus an extra second of nanos
    if value.nanosecond() >= 1_000_000_000 {
        return Err(FormatError::OutOfRange {
            line: line.to_string(),
            reason: "leap seconds are not supported",
        });
    }

    debug!("parsed '{}' as {}", line, value.to_rfc3339());

    Ok(DateLine {
        text: line.to_string(),
        value,
    })
}

/// Compares `line` byte by byte against `DATE_LINE_LAYOUT`.
///
/// Columns in the returned error are 1-based.
fn check_layout(line: &str) -> Result<(), FormatError> {
    let malformed = |index: usize, expected: &'static str| FormatError::Malformed {
        line: line.to_string(),
        column: index + 1,
        expected,
    };

    let bytes: &[u8] = line.as_bytes();
    for (index, slot) in DATE_LINE_LAYOUT.bytes().enumerate() {
        let expected: &'static str = describe(slot);
        let byte: u8 = match bytes.get(index) {
            Some(b) => *b,
            None => return Err(malformed(index, expected)),
        };
        let ok: bool = match slot {
            b'D' => byte.is_ascii_digit(),
            b'S' => byte == b'+' || byte == b'-',
            literal => byte == literal,
        };
        if !ok {
            return Err(malformed(index, expected));
        }
    }

    if bytes.len() > DATE_LINE_LEN {
        return Err(malformed(DATE_LINE_LEN, "end of line"));
    }

    Ok(())
}

fn describe(slot: u8) -> &'static str {
    match slot {
        b'D' => "a digit",
        b'S' => "'+' or '-'",
        b'-' => "'-'",
        b':' => "':'",
        b' ' => "a space",
        _ => "a literal",
    }
}
