use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};

/// A type that can build itself by consuming from a [`Cursor`].
///
/// `from_cursor` must consume exactly the text that belongs to the value and
/// leave the cursor just after it. It may call any cursor operation,
/// including reading other `Parseable` values.
pub trait Parseable: Sized {
    fn from_cursor(cursor: &mut Cursor<'_>) -> Self;

    /// Parse from a whole string. Input left over after the value is ignored.
    fn from_raw(raw: &str) -> Self {
        let mut cursor = Cursor::new(raw);
        Self::from_cursor(&mut cursor)
    }

    /// Parse from a whole string, rejecting input left over after the value.
    fn from_raw_exact(raw: &str) -> Result<Self, ScanError> {
        let mut cursor = Cursor::new(raw);
        let value = Self::from_cursor(&mut cursor);
        if cursor.is_done() {
            Ok(value)
        } else {
            Err(ScanError::new(
                ScanErrorKind::TrailingInput(cursor.remaining().to_string()),
                cursor.offset(),
            ))
        }
    }
}

/// Comma separated, with any number of spaces before each element.
impl<T: Parseable> Parseable for Vec<T> {
    fn from_cursor(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_list_with(&Default::default())
    }
}

macro_rules! impl_parseable_int {
    ($($t:ty),*) => {
        $(
            impl Parseable for $t {
                #[track_caller]
                fn from_cursor(cursor: &mut Cursor<'_>) -> Self {
                    cursor.read_integer()
                }
            }
        )*
    };
}

impl_parseable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A word: the longest run of letters and digits.
impl Parseable for String {
    fn from_cursor(cursor: &mut Cursor<'_>) -> Self {
        cursor.read_word_string()
    }
}

impl Parseable for char {
    #[track_caller]
    fn from_cursor(cursor: &mut Cursor<'_>) -> Self {
        cursor.consume_next()
    }
}
