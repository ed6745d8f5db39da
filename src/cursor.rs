use crate::classify::{is_decimal_digit, is_hex_digit, is_sign, is_whitespace, is_word_char};
use crate::error::{ScanError, ScanErrorKind};
use crate::log::{Logger, ScanLogEntry};
use crate::options::{ListFormat, Options};
use crate::parseable::Parseable;
use memchr::memchr;
use std::num::ParseIntError;
use std::str::FromStr;

/// A position over an immutable input string.
///
/// Every operation works on [`remaining`](Cursor::remaining), the input from
/// the current position onward. Operations named `try_*` report absence and
/// leave the cursor untouched; the others assume the input is well formed and
/// panic with a diagnostic when it is not.
///
/// A clone is a snapshot: it carries its own copy of the scan log, so
/// assigning a saved clone back restores both the position and the log as
/// they were when the clone was taken.
#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    s: &'i str,
    pos: usize,
    list: ListFormat,
    logger: Logger,
}

impl<'i> From<&'i str> for Cursor<'i> {
    fn from(s: &'i str) -> Self {
        Self::new(s)
    }
}

impl<'i> Cursor<'i> {
    pub fn new(s: &'i str) -> Self {
        Self::with_options(s, &Options::default())
    }

    pub fn with_options(s: &'i str, opts: &Options) -> Self {
        Self {
            s,
            pos: 0,
            list: opts.list,
            logger: Logger::new(opts.logging, opts.log_list_path, opts.log_context_window),
        }
    }

    /// The full backing text, including what has already been consumed.
    #[inline]
    pub fn source(&self) -> &'i str {
        self.s
    }

    #[inline]
    pub fn remaining(&self) -> &'i str {
        &self.s[self.pos..]
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.pos == self.s.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Characters consumed so far.
    pub fn char_offset(&self) -> usize {
        self.s[..self.pos].chars().count()
    }

    /// Drain the scan log recorded so far. Empty unless logging is enabled.
    pub fn take_log(&mut self) -> Vec<ScanLogEntry> {
        self.logger.take_entries()
    }

    #[inline]
    fn advance(&mut self, len: usize) -> &'i str {
        let out = &self.s[self.pos..self.pos + len];
        self.pos += len;
        out
    }

    #[inline]
    fn log(&mut self, position: usize, message: &'static str) {
        self.logger.log(self.s, position, message);
    }

    pub fn try_consume(&mut self, literal: &str) -> bool {
        if !self.remaining().starts_with(literal) {
            return false;
        }
        let at = self.pos;
        self.advance(literal.len());
        if !literal.is_empty() {
            self.log(at, "consumed literal");
        }
        true
    }

    pub fn try_consume_char(&mut self, literal: char) -> bool {
        let mut buf = [0u8; 4];
        self.try_consume(literal.encode_utf8(&mut buf))
    }

    /// Consume `literal`, which the grammar guarantees is next.
    ///
    /// # Panics
    /// If the remaining input does not start with `literal`. The message names
    /// the literal and the text found in its place.
    #[track_caller]
    pub fn consume(&mut self, literal: &str) {
        if !self.try_consume(literal) {
            let found = self
                .remaining()
                .chars()
                .take(literal.chars().count())
                .collect();
            ScanError::new(
                ScanErrorKind::UnexpectedLiteral {
                    expected: literal.to_string(),
                    found,
                },
                self.pos,
            )
            .fatal();
        }
    }

    fn find(&self, separator: char) -> Option<usize> {
        let rest = self.remaining();
        if separator.is_ascii() {
            // ASCII bytes never occur inside a multi-byte sequence
            memchr(separator as u8, rest.as_bytes())
        } else {
            rest.find(separator)
        }
    }

    /// Consume the text before `separator` and the separator itself.
    /// Returns the text without the separator, or `None` (and does not move)
    /// if the separator does not occur.
    pub fn consume_through(&mut self, separator: char) -> Option<&'i str> {
        let idx = self.find(separator)?;
        let at = self.pos;
        let out = self.advance(idx);
        self.pos += separator.len_utf8();
        self.log(at, "consumed through separator");
        Some(out)
    }

    /// Like [`consume_through`](Cursor::consume_through) but the separator is
    /// left as the next character.
    pub fn consume_up_to(&mut self, separator: char) -> Option<&'i str> {
        let idx = self.find(separator)?;
        let at = self.pos;
        let out = self.advance(idx);
        self.log(at, "consumed up to separator");
        Some(out)
    }

    pub fn consume_copies_of(&mut self, c: char) {
        let rest = self.remaining().trim_start_matches(c);
        self.pos = self.s.len() - rest.len();
    }

    /// Consume the longest prefix whose characters all satisfy `pred`.
    pub fn consume_while(&mut self, pred: impl FnMut(char) -> bool) -> &'i str {
        let rest = self.remaining();
        let len = rest.len() - rest.trim_start_matches(pred).len();
        self.advance(len)
    }

    pub fn consume_whitespace(&mut self) -> &'i str {
        self.consume_while(is_whitespace)
    }

    pub fn try_consume_next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// # Panics
    /// If the input is exhausted.
    #[track_caller]
    pub fn consume_next(&mut self) -> char {
        match self.try_consume_next() {
            Some(c) => c,
            None => ScanError::new(
                ScanErrorKind::UnexpectedEnd {
                    wanted: 1,
                    available: 0,
                },
                self.pos,
            )
            .fatal(),
        }
    }

    /// Consume exactly `n` characters, or nothing if fewer remain.
    pub fn try_consume_next_n(&mut self, n: usize) -> Option<&'i str> {
        let rest = self.remaining();
        let len = match rest.char_indices().nth(n) {
            Some((idx, _)) => idx,
            None if rest.chars().count() == n => rest.len(),
            None => return None,
        };
        Some(self.advance(len))
    }

    /// # Panics
    /// If fewer than `n` characters remain.
    #[track_caller]
    pub fn consume_next_n(&mut self, n: usize) -> &'i str {
        match self.try_consume_next_n(n) {
            Some(out) => out,
            None => ScanError::new(
                ScanErrorKind::UnexpectedEnd {
                    wanted: n,
                    available: self.remaining().chars().count(),
                },
                self.pos,
            )
            .fatal(),
        }
    }

    /// Consume everything that is left. A second call returns `""`.
    pub fn consume_rest(&mut self) -> &'i str {
        let at = self.pos;
        let out = self.advance(self.s.len() - self.pos);
        if !out.is_empty() {
            self.log(at, "consumed rest");
        }
        out
    }

    /// Read an optional single `-`/`+` followed by decimal digits into any
    /// primitive integer type. Does not move on error.
    pub fn try_read_integer<T>(&mut self) -> Result<T, ScanError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let rest = self.remaining();
        let sign_len = match rest.chars().next() {
            Some(c) if is_sign(c) => 1,
            _ => 0,
        };
        let digits = rest[sign_len..]
            .chars()
            .take_while(|&c| is_decimal_digit(c))
            .count();
        if digits == 0 {
            return Err(ScanError::new(
                ScanErrorKind::MissingDigits { radix: 10 },
                self.pos + sign_len,
            ));
        }
        let token = &rest[..sign_len + digits];
        let value = token.parse::<T>().map_err(|_| {
            ScanError::new(
                ScanErrorKind::OutOfRange {
                    token: token.to_string(),
                    target: std::any::type_name::<T>(),
                },
                self.pos,
            )
        })?;
        let at = self.pos;
        self.advance(token.len());
        self.log(at, "read integer");
        Ok(value)
    }

    /// # Panics
    /// If no digits follow the optional sign, or the value does not fit `T`.
    #[track_caller]
    pub fn read_integer<T>(&mut self) -> T
    where
        T: FromStr<Err = ParseIntError>,
    {
        match self.try_read_integer() {
            Ok(v) => v,
            Err(e) => e.fatal(),
        }
    }

    pub fn try_read_int(&mut self) -> Result<i64, ScanError> {
        self.try_read_integer()
    }

    /// # Panics
    /// If no digits follow the optional sign, or the value overflows `i64`.
    #[track_caller]
    pub fn read_int(&mut self) -> i64 {
        self.read_integer()
    }

    /// Read an optional `0x` prefix followed by hex digits in either case.
    /// Does not move on error.
    pub fn try_read_hex_int(&mut self) -> Result<i64, ScanError> {
        let rest = self.remaining();
        let prefix_len = if rest.starts_with("0x") { 2 } else { 0 };
        let digits = rest[prefix_len..]
            .chars()
            .take_while(|&c| is_hex_digit(c))
            .count();
        let token = &rest[prefix_len..prefix_len + digits];
        if token.is_empty() {
            return Err(ScanError::new(
                ScanErrorKind::MissingDigits { radix: 16 },
                self.pos + prefix_len,
            ));
        }
        let value = i64::from_str_radix(token, 16).map_err(|_| {
            ScanError::new(
                ScanErrorKind::OutOfRange {
                    token: token.to_string(),
                    target: "i64",
                },
                self.pos,
            )
        })?;
        let at = self.pos;
        self.advance(prefix_len + digits);
        self.log(at, "read hex integer");
        Ok(value)
    }

    /// # Panics
    /// If no hex digits follow the optional prefix, or the value overflows `i64`.
    #[track_caller]
    pub fn read_hex_int(&mut self) -> i64 {
        match self.try_read_hex_int() {
            Ok(v) => v,
            Err(e) => e.fatal(),
        }
    }

    /// Consume the longest run of letters and digits. May be empty.
    pub fn read_word(&mut self) -> &'i str {
        let at = self.pos;
        let word = self.consume_while(is_word_char);
        if !word.is_empty() {
            self.log(at, "read word");
        }
        word
    }

    pub fn read_word_string(&mut self) -> String {
        self.read_word().to_string()
    }

    pub fn read_value<T: Parseable>(&mut self) -> T {
        T::from_cursor(self)
    }

    /// Read `padding* T (separator padding* T)*`. Always reads at least one
    /// element; stops at the first element not followed by `separator`.
    pub fn read_list_with<T: Parseable>(&mut self, format: &ListFormat) -> Vec<T> {
        let mut out = Vec::new();
        loop {
            self.consume_copies_of(format.padding);
            let at = self.pos;
            self.logger.push_index(out.len());
            out.push(self.read_value());
            self.log(at, "read list element");
            self.logger.pop_index();
            if !self.try_consume_char(format.separator) {
                break;
            }
        }
        out
    }

    /// [`read_list_with`](Cursor::read_list_with) using the list format this
    /// cursor was configured with.
    pub fn read_list<T: Parseable>(&mut self) -> Vec<T> {
        let format = self.list;
        self.read_list_with(&format)
    }
}
