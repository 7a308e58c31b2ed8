//! Escape sequence decoding shared by string literals, templates and
//! escaped identifiers.
//!
//! The decoder consumes exactly the characters that belong to the escape
//! and leaves the cursor on the first character after it, so callers
//! continue their loop without adjusting the index.

use crate::char_codes::{hex_value, is_octal_digit, MAX_CODE_POINT};
use crate::error::EscapeError;
use crate::flags::Context;
use crate::state::ScannerState;

/// Result of decoding one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// A decoded code point to append to the cooked value.
    Char(char),
    /// Backslash followed by a line terminator; contributes nothing to the
    /// cooked value. The terminator has been consumed but not yet counted.
    LineContinuation,
}

/// Which literal the escape appears in; legacy octal rules differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeSite {
    StringLiteral,
    Template,
}

/// Decode the escape whose first character `ch` is under the cursor (the
/// backslash has already been consumed).
pub(crate) fn decode_escape(
    state: &mut ScannerState<'_>,
    ch: char,
    context: Context,
    site: EscapeSite,
) -> Result<Escape, EscapeError> {
    let simple = match ch {
        'b' => Some('\u{0008}'),
        't' => Some('\t'),
        'n' => Some('\n'),
        'v' => Some('\u{000B}'),
        'f' => Some('\u{000C}'),
        'r' => Some('\r'),
        _ => None,
    };
    if let Some(decoded) = simple {
        state.advance(ch);
        return Ok(Escape::Char(decoded));
    }

    match ch {
        '\r' | '\n' | '\u{2028}' | '\u{2029}' => {
            state.advance(ch);
            if ch == '\r' {
                state.eat(b'\n');
            }
            Ok(Escape::LineContinuation)
        }
        'x' => {
            state.advance(ch);
            let value = hex_at(state, state.index, 2).ok_or(EscapeError::InvalidHex)?;
            state.index += 2;
            Ok(Escape::Char(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)))
        }
        'u' => {
            state.advance(ch);
            decode_unicode_escape(state).map(Escape::Char)
        }
        '0' if !state.peek_byte(1).is_some_and(|b| b.is_ascii_digit()) => {
            state.advance(ch);
            Ok(Escape::Char('\0'))
        }
        '0'..='7' => {
            if site == EscapeSite::Template {
                return Err(EscapeError::TemplateOctal);
            }
            if context.contains(Context::STRICT) {
                return Err(EscapeError::StrictOctal);
            }
            Ok(Escape::Char(decode_legacy_octal(state, ch)))
        }
        '8' | '9' => {
            if site == EscapeSite::Template || context.contains(Context::STRICT) {
                return Err(EscapeError::EightOrNine(ch));
            }
            state.advance(ch);
            Ok(Escape::Char(ch))
        }
        _ => {
            state.advance(ch);
            Ok(Escape::Char(ch))
        }
    }
}

/// Decode the body of a `\u` escape; the cursor is just past the `u`.
///
/// A `\uD8xx\uDCxx` pair combines into one code point. A lone surrogate
/// cannot live in a Rust string and cooks to U+FFFD.
pub(crate) fn decode_unicode_escape(state: &mut ScannerState<'_>) -> Result<char, EscapeError> {
    if state.eat(b'{') {
        let mut value: u32 = 0;
        let mut digits = 0usize;
        while let Some(digit) = state.peek().and_then(hex_value) {
            state.index += 1;
            value = value.saturating_mul(16).saturating_add(digit);
            digits += 1;
        }
        if digits == 0 || !state.eat(b'}') {
            return Err(EscapeError::InvalidUnicode);
        }
        if value > MAX_CODE_POINT {
            return Err(EscapeError::UnicodeOverflow);
        }
        return Ok(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let unit = hex_at(state, state.index, 4).ok_or(EscapeError::InvalidUnicode)?;
    state.index += 4;

    if (0xD800..0xDC00).contains(&unit) {
        let next = state.index;
        if state.byte_at(next) == Some(b'\\') && state.byte_at(next + 1) == Some(b'u') {
            if let Some(low @ 0xDC00..=0xDFFF) = hex_at(state, next + 2, 4) {
                state.index = next + 6;
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
        }
    }

    Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Up to three octal digits, value at most 0o377.
fn decode_legacy_octal(state: &mut ScannerState<'_>, first: char) -> char {
    state.advance(first);
    let mut value = first as u32 - '0' as u32;
    let max_digits = if first <= '3' { 3 } else { 2 };
    for _ in 1..max_digits {
        match state.peek() {
            Some(digit) if is_octal_digit(digit) => {
                state.advance(digit);
                value = value * 8 + (digit as u32 - '0' as u32);
            }
            _ => break,
        }
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Value of `count` hex digits starting at `pos`, without consuming them.
fn hex_at(state: &ScannerState<'_>, pos: usize, count: usize) -> Option<u32> {
    let digits = state.source().as_bytes().get(pos..pos + count)?;
    digits
        .iter()
        .try_fold(0u32, |acc, &byte| Some(acc * 16 + hex_value(byte as char)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode the escape at the start of `body` (text after the backslash).
    fn decode(body: &str, context: Context, site: EscapeSite) -> (Result<Escape, EscapeError>, usize) {
        let mut state = ScannerState::new(body);
        let ch = body.chars().next().unwrap();
        let result = decode_escape(&mut state, ch, context, site);
        (result, state.index())
    }

    fn decode_string(body: &str) -> (Result<Escape, EscapeError>, usize) {
        decode(body, Context::NONE, EscapeSite::StringLiteral)
    }

    #[test]
    fn test_single_character_escapes() {
        for (body, expected) in [
            ("n", '\n'),
            ("t", '\t'),
            ("r", '\r'),
            ("b", '\u{8}'),
            ("v", '\u{b}'),
            ("f", '\u{c}'),
            ("'", '\''),
            ("\"", '"'),
            ("\\", '\\'),
            ("`", '`'),
            ("$", '$'),
            ("q", 'q'),
        ] {
            assert_eq!(decode_string(body), (Ok(Escape::Char(expected)), 1), "\\{body}");
        }
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(decode_string("x41z"), (Ok(Escape::Char('A')), 3));
        assert_eq!(decode_string("x4"), (Err(EscapeError::InvalidHex), 1));
        assert_eq!(decode_string("xg0"), (Err(EscapeError::InvalidHex), 1));
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(decode_string("u0041"), (Ok(Escape::Char('A')), 5));
        assert_eq!(decode_string("u{1F600}"), (Ok(Escape::Char('😀')), 8));
        assert_eq!(decode_string("u{000041}"), (Ok(Escape::Char('A')), 9));
        assert_eq!(decode_string("u{110000}").0, Err(EscapeError::UnicodeOverflow));
        assert_eq!(decode_string("u{}").0, Err(EscapeError::InvalidUnicode));
        assert_eq!(decode_string("u{41").0, Err(EscapeError::InvalidUnicode));
        assert_eq!(decode_string("u00G1").0, Err(EscapeError::InvalidUnicode));
    }

    #[test]
    fn test_surrogate_pairs() {
        assert_eq!(decode_string("uD83D\\uDE00"), (Ok(Escape::Char('😀')), 11));
        assert_eq!(
            decode_string("uD83Dx"),
            (Ok(Escape::Char(char::REPLACEMENT_CHARACTER)), 5)
        );
        assert_eq!(
            decode_string("uDE00"),
            (Ok(Escape::Char(char::REPLACEMENT_CHARACTER)), 5)
        );
    }

    #[test]
    fn test_line_continuations() {
        assert_eq!(decode_string("\nx"), (Ok(Escape::LineContinuation), 1));
        assert_eq!(decode_string("\r\nx"), (Ok(Escape::LineContinuation), 2));
        assert_eq!(decode_string("\rx"), (Ok(Escape::LineContinuation), 1));
        assert_eq!(decode_string("\u{2028}"), (Ok(Escape::LineContinuation), 3));
    }

    #[test]
    fn test_null_escape() {
        assert_eq!(decode_string("0"), (Ok(Escape::Char('\0')), 1));
        assert_eq!(
            decode("0a", Context::NONE, EscapeSite::Template),
            (Ok(Escape::Char('\0')), 1)
        );
        assert_eq!(
            decode("0", Context::STRICT, EscapeSite::StringLiteral),
            (Ok(Escape::Char('\0')), 1)
        );
    }

    #[test]
    fn test_legacy_octal_in_sloppy_strings() {
        assert_eq!(decode_string("101"), (Ok(Escape::Char('A')), 3));
        assert_eq!(decode_string("377"), (Ok(Escape::Char('\u{FF}')), 3));
        assert_eq!(decode_string("400"), (Ok(Escape::Char(' ')), 2));
        assert_eq!(decode_string("08"), (Ok(Escape::Char('\0')), 1));
        assert_eq!(decode_string("7"), (Ok(Escape::Char('\u{7}')), 1));
        assert_eq!(decode_string("8"), (Ok(Escape::Char('8')), 1));
    }

    #[test]
    fn test_octal_rejected_in_strict_and_templates() {
        assert_eq!(
            decode("12", Context::STRICT, EscapeSite::StringLiteral).0,
            Err(EscapeError::StrictOctal)
        );
        assert_eq!(
            decode("01", Context::NONE, EscapeSite::Template).0,
            Err(EscapeError::TemplateOctal)
        );
        assert_eq!(
            decode("9", Context::NONE, EscapeSite::Template).0,
            Err(EscapeError::EightOrNine('9'))
        );
        assert_eq!(
            decode("8", Context::STRICT, EscapeSite::StringLiteral).0,
            Err(EscapeError::EightOrNine('8'))
        );
    }
}
