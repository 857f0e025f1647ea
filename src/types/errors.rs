use std::io;
use thiserror::Error;

/// Errors produced while converting a date line into a Unix timestamp.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("No input line available")]
    MissingInput,
    #[error("Failed while reading input: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
    #[error("Malformed date line '{line}': expected {expected} at column {column}")]
    Malformed {
        line: String,
        column: usize,
        expected: &'static str,
    },
    #[error("Invalid date line '{line}': {source}")]
    Parse {
        line: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid date line '{line}': {reason}")]
    OutOfRange { line: String, reason: &'static str },
    #[error("Failed while writing output: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}
