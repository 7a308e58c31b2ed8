//! Scan errors.
//!
//! Every error here is fatal for the token being scanned. The one
//! recoverable condition, an invalid escape inside a tagged template, is
//! absorbed by the template scanner and never becomes a `ScanError`.

use esscan_core::{LineAndColumn, TextSpan};
use esscan_diagnostics::{messages, Diagnostic};
use thiserror::Error;

/// A malformed escape sequence body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("'\\x' must be followed by two hexadecimal digits")]
    InvalidHex,
    #[error("malformed '\\u' escape")]
    InvalidUnicode,
    #[error("code point out of range")]
    UnicodeOverflow,
    #[error("octal escapes are not allowed in templates")]
    TemplateOctal,
    #[error("octal escapes are not allowed in strict mode")]
    StrictOctal,
    #[error("'\\{0}' is not allowed here")]
    EightOrNine(char),
}

/// Digit family a numeric literal was missing digits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// The buffer ended before a required delimiter.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid escape sequence: {0}")]
    InvalidEscapeSequence(EscapeError),
    /// A character with no classification where a token must start.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("expected a digit")]
    MissingDigits(Radix),
    #[error("numeric separators are not allowed here")]
    InvalidNumericSeparator,
    #[error("legacy octal literals are not allowed in strict mode")]
    LegacyOctalLiteral,
}

impl ScanErrorKind {
    /// The catalog diagnostic this error is recorded as.
    pub fn to_diagnostic(self, span: TextSpan) -> Diagnostic {
        match self {
            ScanErrorKind::UnexpectedEndOfInput => {
                Diagnostic::new(span, &messages::UNEXPECTED_END_OF_TEXT, &[])
            }
            ScanErrorKind::InvalidEscapeSequence(escape) => match escape {
                EscapeError::InvalidHex => {
                    Diagnostic::new(span, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[])
                }
                EscapeError::InvalidUnicode => {
                    Diagnostic::new(span, &messages::INVALID_UNICODE_ESCAPE_SEQUENCE, &[])
                }
                EscapeError::UnicodeOverflow => Diagnostic::new(
                    span,
                    &messages::AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF,
                    &[],
                ),
                EscapeError::TemplateOctal => Diagnostic::new(
                    span,
                    &messages::OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_IN_TEMPLATES,
                    &[],
                ),
                EscapeError::StrictOctal => Diagnostic::new(
                    span,
                    &messages::OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_IN_STRICT_MODE,
                    &[],
                ),
                EscapeError::EightOrNine(digit) => {
                    let text = format!("\\{}", digit);
                    Diagnostic::new(span, &messages::ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED, &[&text])
                }
            },
            ScanErrorKind::InvalidCharacter(ch) => {
                let text = ch.to_string();
                Diagnostic::new(span, &messages::INVALID_CHARACTER, &[&text])
            }
            ScanErrorKind::UnterminatedStringLiteral => {
                Diagnostic::new(span, &messages::UNTERMINATED_STRING_LITERAL, &[])
            }
            ScanErrorKind::UnterminatedComment => {
                Diagnostic::new(span, &messages::ASTERISK_SLASH_EXPECTED, &[])
            }
            ScanErrorKind::MissingDigits(radix) => {
                let message = match radix {
                    Radix::Binary => &messages::BINARY_DIGIT_EXPECTED,
                    Radix::Octal => &messages::OCTAL_DIGIT_EXPECTED,
                    Radix::Decimal => &messages::DIGIT_EXPECTED,
                    Radix::Hex => &messages::HEXADECIMAL_DIGIT_EXPECTED,
                };
                Diagnostic::new(span, message, &[])
            }
            ScanErrorKind::InvalidNumericSeparator => {
                Diagnostic::new(span, &messages::NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE, &[])
            }
            ScanErrorKind::LegacyOctalLiteral => {
                Diagnostic::new(span, &messages::OCTAL_LITERALS_ARE_NOT_ALLOWED_IN_STRICT_MODE, &[])
            }
        }
    }
}

/// A fatal scan error at a precise source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// Byte offset where the anomaly was detected.
    pub pos: usize,
    pub location: LineAndColumn,
}

/// Convenient `Result` alias for scanner operations.
pub type ScanResult<T> = Result<T, ScanError>;
