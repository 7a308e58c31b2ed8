//! ASCII character classification tables.
//!
//! Two `[Token; 128]` arrays indexed directly by code-unit value. They only
//! classify; the scanning routines that act on a classification live in
//! `scanner` and `template`. Characters at or above 0x80 are never looked up
//! here and go through `char_codes` instead.

use crate::token::Token;

/// Provisional token kind for a token whose first character is the index.
///
/// Lowercase letters map to `IdentifierOrKeyword` only when some keyword
/// begins with them; `h`, `j`, `q` and `x` start no keyword and map to
/// `Identifier` so the keyword lookup can be skipped.
#[rustfmt::skip]
pub const FIRST_CHAR_KIND: [Token; 128] = {
    use Token::*;
    [
        /* 0x00 NUL   */ Error,
        /* 0x01 SOH   */ Error,
        /* 0x02 STX   */ Error,
        /* 0x03 ETX   */ Error,
        /* 0x04 EOT   */ Error,
        /* 0x05 ENQ   */ Error,
        /* 0x06 ACK   */ Error,
        /* 0x07 BEL   */ Error,
        /* 0x08 BS    */ Error,
        /* 0x09 TAB   */ WhiteSpace,
        /* 0x0A LF    */ LineFeed,
        /* 0x0B VT    */ WhiteSpace,
        /* 0x0C FF    */ WhiteSpace,
        /* 0x0D CR    */ CarriageReturn,
        /* 0x0E SO    */ Error,
        /* 0x0F SI    */ Error,
        /* 0x10 DLE   */ Error,
        /* 0x11 DC1   */ Error,
        /* 0x12 DC2   */ Error,
        /* 0x13 DC3   */ Error,
        /* 0x14 DC4   */ Error,
        /* 0x15 NAK   */ Error,
        /* 0x16 SYN   */ Error,
        /* 0x17 ETB   */ Error,
        /* 0x18 CAN   */ Error,
        /* 0x19 EM    */ Error,
        /* 0x1A SUB   */ Error,
        /* 0x1B ESC   */ Error,
        /* 0x1C FS    */ Error,
        /* 0x1D GS    */ Error,
        /* 0x1E RS    */ Error,
        /* 0x1F US    */ Error,
        /* 0x20 space */ WhiteSpace,
        /* 0x21 '!'   */ Negate,
        /* 0x22 '"'   */ StringLiteral,
        /* 0x23 '#'   */ Error,
        /* 0x24 '$'   */ Identifier,
        /* 0x25 '%'   */ Modulo,
        /* 0x26 '&'   */ BitwiseAnd,
        /* 0x27 "'"   */ StringLiteral,
        /* 0x28 '('   */ LeftParen,
        /* 0x29 ')'   */ RightParen,
        /* 0x2A '*'   */ Multiply,
        /* 0x2B '+'   */ Add,
        /* 0x2C ','   */ Comma,
        /* 0x2D '-'   */ Subtract,
        /* 0x2E '.'   */ Period,
        /* 0x2F '/'   */ Divide,
        /* 0x30 '0'   */ LeadingZero,
        /* 0x31 '1'   */ NumericLiteral,
        /* 0x32 '2'   */ NumericLiteral,
        /* 0x33 '3'   */ NumericLiteral,
        /* 0x34 '4'   */ NumericLiteral,
        /* 0x35 '5'   */ NumericLiteral,
        /* 0x36 '6'   */ NumericLiteral,
        /* 0x37 '7'   */ NumericLiteral,
        /* 0x38 '8'   */ NumericLiteral,
        /* 0x39 '9'   */ NumericLiteral,
        /* 0x3A ':'   */ Colon,
        /* 0x3B ';'   */ Semicolon,
        /* 0x3C '<'   */ LessThan,
        /* 0x3D '='   */ Assign,
        /* 0x3E '>'   */ GreaterThan,
        /* 0x3F '?'   */ QuestionMark,
        /* 0x40 '@'   */ Error,
        /* 0x41 'A'   */ Identifier,
        /* 0x42 'B'   */ Identifier,
        /* 0x43 'C'   */ Identifier,
        /* 0x44 'D'   */ Identifier,
        /* 0x45 'E'   */ Identifier,
        /* 0x46 'F'   */ Identifier,
        /* 0x47 'G'   */ Identifier,
        /* 0x48 'H'   */ Identifier,
        /* 0x49 'I'   */ Identifier,
        /* 0x4A 'J'   */ Identifier,
        /* 0x4B 'K'   */ Identifier,
        /* 0x4C 'L'   */ Identifier,
        /* 0x4D 'M'   */ Identifier,
        /* 0x4E 'N'   */ Identifier,
        /* 0x4F 'O'   */ Identifier,
        /* 0x50 'P'   */ Identifier,
        /* 0x51 'Q'   */ Identifier,
        /* 0x52 'R'   */ Identifier,
        /* 0x53 'S'   */ Identifier,
        /* 0x54 'T'   */ Identifier,
        /* 0x55 'U'   */ Identifier,
        /* 0x56 'V'   */ Identifier,
        /* 0x57 'W'   */ Identifier,
        /* 0x58 'X'   */ Identifier,
        /* 0x59 'Y'   */ Identifier,
        /* 0x5A 'Z'   */ Identifier,
        /* 0x5B '['   */ LeftBracket,
        /* 0x5C '\\'  */ EscapedIdentifier,
        /* 0x5D ']'   */ RightBracket,
        /* 0x5E '^'   */ BitwiseXor,
        /* 0x5F '_'   */ Identifier,
        /* 0x60 '`'   */ TemplateTail,
        /* 0x61 'a'   */ IdentifierOrKeyword,
        /* 0x62 'b'   */ IdentifierOrKeyword,
        /* 0x63 'c'   */ IdentifierOrKeyword,
        /* 0x64 'd'   */ IdentifierOrKeyword,
        /* 0x65 'e'   */ IdentifierOrKeyword,
        /* 0x66 'f'   */ IdentifierOrKeyword,
        /* 0x67 'g'   */ IdentifierOrKeyword,
        /* 0x68 'h'   */ Identifier,
        /* 0x69 'i'   */ IdentifierOrKeyword,
        /* 0x6A 'j'   */ Identifier,
        /* 0x6B 'k'   */ IdentifierOrKeyword,
        /* 0x6C 'l'   */ IdentifierOrKeyword,
        /* 0x6D 'm'   */ IdentifierOrKeyword,
        /* 0x6E 'n'   */ IdentifierOrKeyword,
        /* 0x6F 'o'   */ IdentifierOrKeyword,
        /* 0x70 'p'   */ IdentifierOrKeyword,
        /* 0x71 'q'   */ Identifier,
        /* 0x72 'r'   */ IdentifierOrKeyword,
        /* 0x73 's'   */ IdentifierOrKeyword,
        /* 0x74 't'   */ IdentifierOrKeyword,
        /* 0x75 'u'   */ IdentifierOrKeyword,
        /* 0x76 'v'   */ IdentifierOrKeyword,
        /* 0x77 'w'   */ IdentifierOrKeyword,
        /* 0x78 'x'   */ Identifier,
        /* 0x79 'y'   */ IdentifierOrKeyword,
        /* 0x7A 'z'   */ IdentifierOrKeyword,
        /* 0x7B '{'   */ LeftBrace,
        /* 0x7C '|'   */ BitwiseOr,
        /* 0x7D '}'   */ RightBrace,
        /* 0x7E '~'   */ Complement,
        /* 0x7F DEL   */ Error,
    ]
};

/// Classification of the character that follows a leading `0`.
pub const DIGIT_CLASS_KIND: [Token; 128] = {
    let mut table = [Token::Error; 128];
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = Token::NumericLiteral;
        digit += 1;
    }
    table[b'b' as usize] = Token::BinaryDigits;
    table[b'B' as usize] = Token::BinaryDigits;
    table[b'o' as usize] = Token::OctalDigits;
    table[b'O' as usize] = Token::OctalDigits;
    table[b'x' as usize] = Token::HexDigits;
    table[b'X' as usize] = Token::HexDigits;
    table[b'_' as usize] = Token::Underscore;
    table
};

/// First-character classification, `None` above ASCII.
#[inline]
pub fn first_char_kind(ch: char) -> Option<Token> {
    FIRST_CHAR_KIND.get(ch as usize).copied()
}

/// Classification of the character after a leading `0`, `None` above ASCII.
#[inline]
pub fn digit_class_kind(ch: char) -> Option<Token> {
    DIGIT_CLASS_KIND.get(ch as usize).copied()
}
