//! A cursor over an immutable string for hand-written recursive descent
//! parsers of small textual formats.
//!
//! ```
//! use simpleparser::{Cursor, Parseable};
//!
//! let mut c = Cursor::new("move 3 from 0x1f: a, b");
//! c.consume("move ");
//! assert_eq!(c.read_int(), 3);
//! c.consume(" from ");
//! assert_eq!(c.read_hex_int(), 31);
//! c.consume(":");
//! let names: Vec<String> = c.read_value();
//! assert_eq!(names, ["a", "b"]);
//! assert!(c.is_done());
//!
//! assert_eq!(Vec::<i32>::from_raw("1, 2,3"), [1, 2, 3]);
//! ```
mod classify;
mod cursor;
pub mod error;
mod log;
pub mod options;
mod parseable;

pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use log::ScanLogEntry;
pub use options::{ListFormat, Options};
pub use parseable::Parseable;

/// Parse a `T` from the start of `input`. Trailing input is ignored.
pub fn parse<T: Parseable>(input: &str) -> T {
    T::from_raw(input)
}

/// Parse a `T` from the start of `input` and return the scan log recorded
/// while doing so. Entries are only recorded when `opts.logging` is set.
pub fn parse_with_log<T: Parseable>(input: &str, opts: &Options) -> (T, Vec<ScanLogEntry>) {
    let mut cursor = Cursor::with_options(input, opts);
    let value = T::from_cursor(&mut cursor);
    (value, cursor.take_log())
}

#[cfg(test)]
mod tests;
