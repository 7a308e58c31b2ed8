//! Character constants and the Unicode-aware classifier.
//!
//! The ASCII dispatch tables in `tables` are silent above 0x7F; everything
//! here is total over `char` and is what the scanner consults for non-ASCII
//! input.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// First character that skips escape decoding when it follows a backslash.
pub const ESCAPE_FAST_PATH_START: char = '}';

/// Largest valid code point for `\u{...}` escapes.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(
        ch,
        LINE_FEED | CARRIAGE_RETURN | LINE_SEPARATOR | PARAGRAPH_SEPARATOR
    )
}

/// Whether the character is one of the two non-ASCII line terminators.
#[inline]
pub fn is_unicode_line_terminator(ch: char) -> bool {
    ch == LINE_SEPARATOR || ch == PARAGRAPH_SEPARATOR
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | BYTE_ORDER_MARK
    )
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        ch == '_' || ch == '$' || ch.is_ascii_alphabetic()
    } else {
        unicode_xid::UnicodeXID::is_xid_start(ch)
    }
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        ch == '_' || ch == '$' || ch.is_ascii_alphanumeric()
    } else {
        // ZWNJ and ZWJ are allowed inside identifiers.
        ch == '\u{200C}' || ch == '\u{200D}' || unicode_xid::UnicodeXID::is_xid_continue(ch)
    }
}

/// Check if a character is an octal digit (0-7).
#[inline]
pub fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

/// Value of an ASCII hex digit.
#[inline]
pub fn hex_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}
