use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::core;
use crate::types::date_line::DateLine;
use crate::types::errors::FormatError;

/// Parses a single `YYYY-MM-DD HH:MM:SS ±HHMM` line.
///
/// `line` must already have its line terminator removed. Every field must be
/// zero-padded to its full width, date and time are separated by exactly one
/// space, and the offset is a sign followed by four digits (`+0100`, `-0530`).
///
/// # Errors
/// - `FormatError::Malformed` if the text does not have the expected shape.
/// - `FormatError::Parse` if a field is out of range (month 13, Feb 30, hour 24, ...).
/// - `FormatError::OutOfRange` for year `0000` or a `:60` leap second.
pub fn from_str(line: &str) -> Result<DateLine, FormatError> {
    core::date_line::from_line(line).inspect_err(|err| warn!("rejected date line: {err}"))
}

/// Reads one line from `reader` and strips a trailing `\n` or `\r\n`.
///
/// Only the line terminator is removed; other trailing whitespace is kept and
/// will fail the layout check later on.
///
/// # Errors
/// - `FormatError::MissingInput` if the reader is already at end of input.
/// - `FormatError::Read` on I/O errors (including invalid UTF-8).
pub fn read_line<R: BufRead>(mut reader: R) -> Result<String, FormatError> {
    let mut line: String = String::new();
    let read: usize = reader
        .read_line(&mut line)
        .map_err(|source| FormatError::Read { source })?;
    if read == 0 {
        return Err(FormatError::MissingInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    debug!("read {} bytes: '{}'", read, line);

    Ok(line)
}

/// Reads one line from `reader` and returns its Unix timestamp.
pub fn from_reader<R: BufRead>(reader: R) -> Result<i64, FormatError> {
    let line: String = read_line(reader)?;
    let parsed: DateLine = from_str(&line)?;
    Ok(parsed.timestamp())
}

/// Reads one date line from `reader` and writes its Unix timestamp to `writer`.
///
/// The timestamp is written as decimal text followed by `\n`. Nothing is
/// written when reading or parsing fails. Only the first line of input is
/// consumed; anything after it is left in the reader.
///
/// # Returns
/// - `Ok(timestamp)` once the output line has been written and flushed.
///
/// # Errors
/// - Any error from `from_reader`.
/// - `FormatError::Write` if `writer` fails.
pub fn convert<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<i64, FormatError> {
    let timestamp: i64 = from_reader(reader)?;

    writeln!(writer, "{timestamp}").map_err(|source| FormatError::Write { source })?;
    writer
        .flush()
        .map_err(|source| FormatError::Write { source })?;

    Ok(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_lf_and_crlf() {
        assert_eq!(read_line(Cursor::new("abc\n")).unwrap(), "abc");
        assert_eq!(read_line(Cursor::new("abc\r\n")).unwrap(), "abc");
        assert_eq!(read_line(Cursor::new("abc")).unwrap(), "abc");
    }

    #[test]
    fn keeps_trailing_spaces() {
        assert_eq!(read_line(Cursor::new("abc  \n")).unwrap(), "abc  ");
    }

    #[test]
    fn empty_reader_is_missing_input() {
        assert!(matches!(
            read_line(Cursor::new("")),
            Err(FormatError::MissingInput)
        ));
    }

    #[test]
    fn reads_only_first_line() {
        let input = "1970-01-01 00:00:00 +0000\ngarbage\n";
        assert_eq!(from_reader(Cursor::new(input)).unwrap(), 0);
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let input: &[u8] = &[0xff, 0xfe, b'\n'];
        assert!(matches!(read_line(input), Err(FormatError::Read { .. })));
    }
}
