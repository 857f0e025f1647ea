//! Convert a `YYYY-MM-DD HH:MM:SS ±HHMM` line into a Unix timestamp.
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut out: Vec<u8> = Vec::new();
//! let ts = parsedate::parse::convert(Cursor::new("2021-06-15 13:45:30 +0100\n"), &mut out).unwrap();
//! assert_eq!(ts, 1_623_761_130);
//! assert_eq!(out, b"1623761130\n");
//! ```

pub mod constants;
pub(crate) mod core;
pub mod format;
pub mod logger;
pub mod parse;
pub mod types;

pub use types::date_line::DateLine;
pub use types::errors::FormatError;
