//! esscan_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Defines the scanner's message catalog and the positioned `Diagnostic`
//! values that fatal scan errors are recorded as. Formatting for humans is
//! left to the caller; this crate only carries codes, spans and resolved
//! message text.

use esscan_core::text::TextSpan;
use std::fmt;

/// A diagnostic message template with a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic error code (e.g., 1002).
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized error diagnostic with its span and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: TextSpan,
    pub message_text: String,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic anchored at a span of the current source buffer.
    pub fn new(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span,
            message_text: format_message(message.message, args),
            code: message.code,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): error ES{}: {}", self.span.start, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated while scanning, in report order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The most recently reported diagnostic.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drop everything recorded after the first `len` diagnostics.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1499)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, "Unterminated string literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, "'*/' expected.");
    pub const OCTAL_LITERALS_ARE_NOT_ALLOWED_IN_STRICT_MODE: DiagnosticMessage = diag!(1121, "Octal literals are not allowed in strict mode.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1124, "Digit expected.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1125, "Hexadecimal digit expected.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage = diag!(1126, "Unexpected end of text.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, "Invalid character '{0}'.");
    pub const BINARY_DIGIT_EXPECTED: DiagnosticMessage = diag!(1177, "Binary digit expected.");
    pub const OCTAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1178, "Octal digit expected.");
    pub const AN_EXTENDED_UNICODE_ESCAPE_VALUE_MUST_BE_BETWEEN_0X0_AND_0X10FFFF: DiagnosticMessage = diag!(1198, "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.");
    pub const INVALID_UNICODE_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1199, "Invalid Unicode escape sequence.");
    pub const OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_IN_STRICT_MODE: DiagnosticMessage = diag!(1487, "Octal escape sequences are not allowed in strict mode.");
    pub const OCTAL_ESCAPE_SEQUENCES_ARE_NOT_ALLOWED_IN_TEMPLATES: DiagnosticMessage = diag!(1488, "Octal escape sequences are not allowed in untagged templates.");
    pub const ESCAPE_SEQUENCE_0_IS_NOT_ALLOWED: DiagnosticMessage = diag!(1489, "Escape sequence '{0}' is not allowed.");

    // ========================================================================
    // Numeric literal errors (6000-6199)
    // ========================================================================
    pub const NUMERIC_SEPARATORS_ARE_NOT_ALLOWED_HERE: DiagnosticMessage = diag!(6188, "Numeric separators are not allowed here.");
}
