//! The mutable cursor over one source buffer.

use crate::char_codes::is_line_terminator;
use crate::flags::TokenFlags;
use crate::token::Token;
use std::ops::Range;

/// Cursor and per-token results for one source buffer.
///
/// `index` only moves forward, apart from the single step back taken when a
/// template resumes after a substitution. A snapshot of the state may be
/// taken between tokens for lookahead; it is never copied mid-token.
#[derive(Debug, Clone)]
pub struct ScannerState<'src> {
    source: &'src str,
    /// Next unread byte offset.
    pub(crate) index: usize,
    /// Offset of the first byte of the current token.
    pub(crate) token_start: usize,
    /// 0-based count of line terminators consumed so far.
    pub(crate) line: u32,
    /// Offset where the current line begins.
    pub(crate) line_start: usize,
    /// Cooked value of the current token. `None` once a tagged template
    /// segment has abandoned cooking.
    pub(crate) token_value: Option<String>,
    /// Verbatim slice bounds of the current token.
    pub(crate) raw: Range<usize>,
    pub(crate) token: Token,
    pub(crate) flags: TokenFlags,
}

impl<'src> ScannerState<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            index: 0,
            token_start: 0,
            line: 0,
            line_start: 0,
            token_value: Some(String::new()),
            raw: 0..0,
            token: Token::Error,
            flags: TokenFlags::NONE,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Column of `pos` on the current line, in bytes.
    #[inline]
    pub fn column_of(&self, pos: usize) -> u32 {
        pos.saturating_sub(self.line_start) as u32
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.index >= self.source.len()
    }

    /// The character under the cursor.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.source.get(self.index..)?.chars().next()
    }

    /// The byte at an absolute offset.
    #[inline]
    pub(crate) fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    /// The byte `offset` bytes past the cursor.
    #[inline]
    pub(crate) fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.byte_at(self.index + offset)
    }

    /// Consume `ch`, which must be the character under the cursor.
    #[inline]
    pub(crate) fn advance(&mut self, ch: char) {
        debug_assert_eq!(self.peek(), Some(ch));
        self.index += ch.len_utf8();
    }

    /// Consume the given byte if it is under the cursor.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek_byte(0) == Some(byte) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Record that a line terminator ended just before the cursor.
    #[inline]
    pub(crate) fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.index;
    }

    /// Consume the line terminator `ch` under the cursor. CR LF is one
    /// terminator.
    pub(crate) fn consume_line_terminator(&mut self, ch: char) {
        self.advance(ch);
        if ch == '\r' && self.peek_byte(0) == Some(b'\n') {
            self.index += 1;
        }
        self.new_line();
    }

    /// Move the cursor to `end`, counting the line terminators passed over.
    pub(crate) fn bump_to(&mut self, end: usize) {
        while self.index < end {
            match self.peek() {
                Some(ch) if is_line_terminator(ch) => self.consume_line_terminator(ch),
                Some(ch) => self.advance(ch),
                None => break,
            }
        }
    }

    /// Step back over the single-byte delimiter just consumed.
    pub(crate) fn step_back(&mut self) {
        debug_assert!(self.index > 0 && self.source.is_char_boundary(self.index - 1));
        self.index -= 1;
    }

    /// Start a fresh cooked value, reusing the previous allocation.
    pub(crate) fn reset_token_value(&mut self) {
        match &mut self.token_value {
            Some(value) => value.clear(),
            None => self.token_value = Some(String::new()),
        }
    }

    /// Append to the cooked value unless cooking was abandoned.
    #[inline]
    pub(crate) fn push_cooked(&mut self, ch: char) {
        if let Some(value) = &mut self.token_value {
            value.push(ch);
        }
    }

    pub(crate) fn push_cooked_str(&mut self, text: &str) {
        if let Some(value) = &mut self.token_value {
            value.push_str(text);
        }
    }

    pub(crate) fn abandon_cooked(&mut self) {
        self.token_value = None;
    }

    /// The cooked value of the current token.
    #[inline]
    pub fn token_value(&self) -> Option<&str> {
        self.token_value.as_deref()
    }

    /// The verbatim source text of the current token.
    #[inline]
    pub fn token_raw(&self) -> &'src str {
        &self.source[self.raw.clone()]
    }

    pub fn slice(&self, range: Range<usize>) -> &'src str {
        &self.source[range]
    }
}
