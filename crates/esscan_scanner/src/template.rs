//! Template literal segments.
//!
//! A segment runs from an opening delimiter (the backtick, or the `}` that
//! closes a substitution) to the next unescaped backtick (`TemplateTail`)
//! or `${` (`TemplateCont`). The cooked value is built as the segment is
//! read; the raw value is always the untouched source between the
//! delimiters.

use crate::char_codes::{is_line_terminator, is_unicode_line_terminator, ESCAPE_FAST_PATH_START};
use crate::error::{ScanErrorKind, ScanResult};
use crate::escape::{decode_escape, Escape, EscapeSite};
use crate::flags::{Context, TokenFlags};
use crate::scanner::Scanner;
use crate::token::Token;

impl<'src> Scanner<'src> {
    /// Scan the first segment of a template. The cursor must be on the
    /// opening backtick.
    pub fn scan_template(&mut self, context: Context) -> ScanResult<Token> {
        self.state.flags = TokenFlags::NONE;
        self.state.token_start = self.state.index;
        self.scan_template_segment(context)
    }

    /// Scan the segment that follows a substitution. Call this right after
    /// the `}` closing the substitution has been scanned as `RightBrace`.
    pub fn scan_template_tail(&mut self, context: Context) -> ScanResult<Token> {
        if self.state.is_eof() || self.state.index == 0 {
            return Err(self.report(ScanErrorKind::UnexpectedEndOfInput, self.state.index));
        }
        self.state.step_back();
        self.state.flags = TokenFlags::NONE;
        self.state.token_start = self.state.index;
        self.scan_template_segment(context)
    }

    /// Shared segment loop; the cursor is on the opening delimiter.
    pub(crate) fn scan_template_segment(&mut self, context: Context) -> ScanResult<Token> {
        let context = context | self.options.context();
        self.state.index += 1;
        let start = self.state.index;
        self.state.reset_token_value();

        loop {
            let Some(ch) = self.state.peek() else {
                return Err(self.report(ScanErrorKind::UnexpectedEndOfInput, self.state.index));
            };
            match ch {
                '`' => {
                    let end = self.state.index;
                    self.state.index += 1;
                    return Ok(self.finish_template(start, end, Token::TemplateTail));
                }
                '$' if self.state.peek_byte(1) == Some(b'{') => {
                    let end = self.state.index;
                    self.state.index += 2;
                    return Ok(self.finish_template(start, end, Token::TemplateCont));
                }
                '\\' => {
                    let escape_start = self.state.index;
                    self.state.index += 1;
                    let Some(next) = self.state.peek() else {
                        return Err(
                            self.report(ScanErrorKind::UnexpectedEndOfInput, self.state.index)
                        );
                    };
                    if next >= ESCAPE_FAST_PATH_START && !is_unicode_line_terminator(next) {
                        self.state.advance(next);
                        self.state.push_cooked(next);
                        continue;
                    }
                    match decode_escape(&mut self.state, next, context, EscapeSite::Template) {
                        Ok(Escape::Char(decoded)) => self.state.push_cooked(decoded),
                        Ok(Escape::LineContinuation) => self.state.new_line(),
                        Err(_) if context.contains(Context::TAGGED_TEMPLATE) => {
                            return self.scan_bad_template(start);
                        }
                        Err(escape) => {
                            return Err(self.report(
                                ScanErrorKind::InvalidEscapeSequence(escape),
                                escape_start,
                            ));
                        }
                    }
                }
                '\r' => {
                    self.state.consume_line_terminator(ch);
                    self.state.push_cooked('\n');
                }
                '\n' | '\u{2028}' | '\u{2029}' => {
                    self.state.consume_line_terminator(ch);
                    self.state.push_cooked(ch);
                }
                _ => {
                    self.state.advance(ch);
                    self.state.push_cooked(ch);
                }
            }
        }
    }

    /// Finish a tagged template segment after an invalid escape. Escapes
    /// are skipped without being decoded and nothing more is cooked.
    fn scan_bad_template(&mut self, start: usize) -> ScanResult<Token> {
        tracing::trace!(start, line = self.state.line, "invalid escape in tagged template");
        self.state.abandon_cooked();
        self.state.flags |= TokenFlags::CONTAINS_INVALID_ESCAPE;

        loop {
            let rest = &self.state.source().as_bytes()[self.state.index..];
            let Some(offset) = memchr::memchr3(b'`', b'$', b'\\', rest) else {
                self.state.bump_to(self.state.len());
                return Err(self.report(ScanErrorKind::UnexpectedEndOfInput, self.state.index));
            };
            let at = self.state.index + offset;
            self.state.bump_to(at);
            match rest[offset] {
                b'`' => {
                    self.state.index += 1;
                    return Ok(self.finish_template(start, at, Token::TemplateTail));
                }
                b'$' if self.state.byte_at(at + 1) == Some(b'{') => {
                    self.state.index += 2;
                    return Ok(self.finish_template(start, at, Token::TemplateCont));
                }
                b'$' => self.state.index += 1,
                _ => {
                    self.state.index += 1;
                    match self.state.peek() {
                        Some(ch) if is_line_terminator(ch) => {
                            self.state.consume_line_terminator(ch)
                        }
                        Some(ch) => self.state.advance(ch),
                        None => {
                            return Err(
                                self.report(ScanErrorKind::UnexpectedEndOfInput, self.state.index)
                            );
                        }
                    }
                }
            }
        }
    }

    fn finish_template(&mut self, start: usize, end: usize, token: Token) -> Token {
        self.state.raw = start..end;
        self.state.token = token;
        tracing::trace!(
            ?token,
            start,
            end,
            cooked = self.state.token_value.is_some(),
            "template segment"
        );
        token
    }
}
