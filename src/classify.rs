#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[inline]
pub fn is_sign(c: char) -> bool {
    matches!(c, '-' | '+')
}

#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Letters or numbers. Underscores and punctuation end a word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}
