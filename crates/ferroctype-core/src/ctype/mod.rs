//! Character classification and conversion.
//!
//! Implements the `<ctype.h>` family for single bytes. C locale only: every
//! class below is a fixed ASCII range, written as literal range patterns so
//! the boundaries are visible at the definition site. No tables, no locale
//! state.

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    matches!(c, b'A'..=b'Z')
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    matches!(c, b'a'..=b'z')
}

/// Returns `true` if `c` is a letter (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    matches!(c, b'A'..=b'Z' | b'a'..=b'z')
}

/// Returns `true` if `c` is a letter or a decimal digit (`[0-9A-Za-z]`).
#[inline]
pub fn is_alnum(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
}

/// Returns `true` if `c` is a hexadecimal digit (`[0-9A-Fa-f]`).
#[inline]
pub fn is_xdigit(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'A'..=b'F' | b'a'..=b'f')
}

/// Returns `true` if `c` is a control character.
///
/// Control characters are the codes 0 through 31 plus DEL (127).
#[inline]
pub fn is_cntrl(c: u8) -> bool {
    matches!(c, 0..=31 | 127)
}

/// Returns `true` if `c` is whitespace.
///
/// Whitespace: tab, newline, vertical tab, form feed, carriage return
/// (the contiguous run 9 through 13) and space.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b'\t'..=b'\r' | b' ')
}

/// Returns `true` if `c` is a blank: space or horizontal tab.
#[inline]
pub fn is_blank(c: u8) -> bool {
    matches!(c, b'\t' | b' ')
}

/// Returns `true` if `c` is printable, including space (32 through 126).
#[inline]
pub fn is_print(c: u8) -> bool {
    matches!(c, 0x20..=0x7E)
}

/// Returns `true` if `c` has a visible glyph: printable and not space.
#[inline]
pub fn is_graph(c: u8) -> bool {
    matches!(c, 0x21..=0x7E)
}

/// Returns `true` if `c` is punctuation: a visible glyph that is neither a
/// letter nor a digit.
#[inline]
pub fn is_punct(c: u8) -> bool {
    is_graph(c) && !is_alnum(c)
}

/// Converts `c` to uppercase if it is a lowercase letter.
///
/// ASCII cases differ only in bit 5, so the letter ranges fold with a single
/// bit flip.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c ^ 0x20 } else { c }
}

/// Converts `c` to lowercase if it is an uppercase letter.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c | 0x20 } else { c }
}
