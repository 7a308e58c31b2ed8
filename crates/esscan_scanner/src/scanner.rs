//! The ECMAScript scanner.
//!
//! Converts source text into tokens on demand. Trivia is skipped before
//! every token, the first character is classified through the ASCII
//! dispatch tables (or the Unicode classifier above 0x7F), and the matching
//! routine consumes the rest of the token.

use crate::char_codes::*;
use crate::error::{Radix, ScanError, ScanErrorKind, ScanResult};
use crate::escape::{decode_escape, decode_unicode_escape, Escape, EscapeSite};
use crate::flags::{Context, TokenFlags};
use crate::options::ScannerOptions;
use crate::state::ScannerState;
use crate::tables::{digit_class_kind, first_char_kind};
use crate::token::{Keyword, Token, TokenInfo};
use esscan_core::{LineAndColumn, TextRange, TextSpan};
use esscan_diagnostics::DiagnosticCollection;

/// The scanner converts ECMAScript source text into tokens.
pub struct Scanner<'src> {
    pub(crate) state: ScannerState<'src>,
    pub(crate) options: ScannerOptions,
    /// Fatal errors reported so far, as catalog diagnostics.
    diagnostics: DiagnosticCollection,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner with default options.
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    pub fn with_options(source: &'src str, options: ScannerOptions) -> Self {
        Self {
            state: ScannerState::new(source),
            options,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.state.source()
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> Token {
        self.state.token
    }

    /// Cooked value of the current token, `None` when it was abandoned.
    #[inline]
    pub fn token_value(&self) -> Option<&str> {
        self.state.token_value()
    }

    #[inline]
    pub fn token_raw(&self) -> &'src str {
        self.state.token_raw()
    }

    /// Start of the current token (after leading trivia).
    #[inline]
    pub fn token_start(&self) -> usize {
        self.state.token_start
    }

    /// End of the current token, which is also the cursor.
    #[inline]
    pub fn token_end(&self) -> usize {
        self.state.index
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.state.flags
    }

    /// 0-based line of the cursor.
    #[inline]
    pub fn line(&self) -> u32 {
        self.state.line
    }

    /// 0-based byte column of the cursor.
    #[inline]
    pub fn column(&self) -> u32 {
        self.state.column_of(self.state.index)
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.state.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Snapshot of the current token.
    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.state.token,
            range: TextRange::from_offsets(self.state.token_start, self.state.index),
            value: self.state.token_value.clone(),
            raw: self.token_raw().to_owned(),
            flags: self.state.flags,
        }
    }

    #[inline]
    pub fn state(&self) -> &ScannerState<'src> {
        &self.state
    }

    /// Save the full scanner state. Only meaningful between tokens.
    pub fn save_state(&self) -> ScannerState<'src> {
        self.state.clone()
    }

    pub fn restore_state(&mut self, state: ScannerState<'src>) {
        self.state = state;
    }

    /// Run `f`, then put the scanner back where it was. Diagnostics
    /// reported inside `f` are discarded.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.save_state();
        let reported = self.diagnostics.len();
        let result = f(self);
        self.restore_state(saved);
        self.diagnostics.truncate(reported);
        result
    }

    /// Run `f` and keep its progress only if it returns `Some`.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.save_state();
        let reported = self.diagnostics.len();
        let result = f(self);
        if result.is_none() {
            self.restore_state(saved);
            self.diagnostics.truncate(reported);
        }
        result
    }

    /// Record a fatal error at `pos` and build the value to return.
    pub(crate) fn report(&mut self, kind: ScanErrorKind, pos: usize) -> ScanError {
        let location = LineAndColumn::new(self.state.line, self.state.column_of(pos));
        let length = self
            .state
            .source()
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        let span = TextSpan::new(pos as u32, length as u32);
        self.diagnostics.add(kind.to_diagnostic(span));
        tracing::debug!(%kind, pos, %location, "fatal scan error");
        self.state.token = Token::Error;
        ScanError {
            kind,
            pos,
            location,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> ScanResult<Token> {
        self.scan_with_context(Context::NONE)
    }

    /// Scan the next token in `context`. `Context::TAGGED_TEMPLATE` only
    /// matters when the token turns out to be a template.
    pub fn scan_with_context(&mut self, context: Context) -> ScanResult<Token> {
        let context = context | self.options.context();
        self.state.flags = TokenFlags::NONE;
        self.state.reset_token_value();
        self.skip_trivia()?;

        let start = self.state.index;
        self.state.token_start = start;
        let Some(ch) = self.state.peek() else {
            self.state.raw = start..start;
            self.state.token = Token::EndOfSource;
            return Ok(Token::EndOfSource);
        };

        let token = match first_char_kind(ch) {
            Some(Token::TemplateTail) => return self.scan_template_segment(context),
            Some(kind) => self.scan_ascii(kind, ch, context)?,
            None if is_identifier_start(ch) => self.scan_identifier(Token::Identifier)?,
            None => return Err(self.report(ScanErrorKind::InvalidCharacter(ch), start)),
        };
        self.state.raw = start..self.state.index;
        self.state.token = token;
        Ok(token)
    }

    fn scan_ascii(&mut self, kind: Token, ch: char, context: Context) -> ScanResult<Token> {
        match kind {
            Token::StringLiteral => self.scan_string_literal(ch, context),
            Token::LeadingZero => self.scan_leading_zero(context),
            Token::NumericLiteral => self.scan_decimal(self.state.index),
            Token::Identifier | Token::IdentifierOrKeyword | Token::EscapedIdentifier => {
                self.scan_identifier(kind)
            }
            Token::Period
                if self
                    .state
                    .peek_byte(1)
                    .is_some_and(|b| b.is_ascii_digit()) =>
            {
                self.scan_decimal_rest(self.state.index)
            }
            Token::Error if ch == '#' => self.scan_private_name(),
            Token::Error | Token::WhiteSpace | Token::LineFeed | Token::CarriageReturn => {
                Err(self.report(ScanErrorKind::InvalidCharacter(ch), self.state.index))
            }
            punctuator => Ok(self.scan_punctuator(punctuator)),
        }
    }

    /// Skip whitespace, line terminators, comments and a leading hashbang.
    fn skip_trivia(&mut self) -> ScanResult<()> {
        if self.state.index == 0
            && self.options.skip_hashbang
            && self.state.source().starts_with("#!")
        {
            self.skip_line_comment();
        }

        loop {
            let Some(ch) = self.state.peek() else {
                return Ok(());
            };
            match first_char_kind(ch) {
                Some(Token::WhiteSpace) => self.state.index += 1,
                Some(Token::LineFeed | Token::CarriageReturn) => {
                    self.state.consume_line_terminator(ch);
                    self.state.flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                Some(Token::Divide) => match self.state.peek_byte(1) {
                    Some(b'/') => {
                        self.state.index += 2;
                        self.skip_line_comment();
                    }
                    Some(b'*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                Some(_) => return Ok(()),
                None if is_unicode_line_terminator(ch) => {
                    self.state.consume_line_terminator(ch);
                    self.state.flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                None if is_white_space_single_line(ch) => self.state.advance(ch),
                None => return Ok(()),
            }
        }
    }

    /// Move to the line terminator ending the current line, or to the end.
    fn skip_line_comment(&mut self) {
        loop {
            let rest = &self.state.source().as_bytes()[self.state.index..];
            // 0xE2 leads the UTF-8 encoding of both LS and PS.
            let Some(offset) = memchr::memchr3(b'\n', b'\r', 0xE2, rest) else {
                self.state.index = self.state.len();
                return;
            };
            self.state.index += offset;
            if rest[offset] != 0xE2 {
                return;
            }
            match self.state.peek() {
                Some(ch) if is_unicode_line_terminator(ch) => return,
                Some(ch) => self.state.advance(ch),
                None => return,
            }
        }
    }

    /// The cursor is on the `/` of `/*`.
    fn skip_block_comment(&mut self) -> ScanResult<()> {
        let body = self.state.index + 2;
        let rest = &self.state.source().as_bytes()[body..];
        let line = self.state.line;
        self.state.index = body;
        match memchr::memmem::find(rest, b"*/") {
            Some(offset) => {
                self.state.bump_to(body + offset);
                self.state.index += 2;
                if self.state.line != line {
                    self.state.flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                Ok(())
            }
            None => {
                self.state.bump_to(self.state.len());
                Err(self.report(ScanErrorKind::UnterminatedComment, self.state.index))
            }
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Longest punctuator starting with the character classified as `first`.
    fn scan_punctuator(&mut self, first: Token) -> Token {
        self.state.index += 1;
        let state = &mut self.state;
        match first {
            Token::Negate => {
                if state.eat(b'=') {
                    if state.eat(b'=') {
                        Token::StrictNotEqual
                    } else {
                        Token::NotEqual
                    }
                } else {
                    Token::Negate
                }
            }
            Token::Modulo => {
                if state.eat(b'=') {
                    Token::ModuloAssign
                } else {
                    Token::Modulo
                }
            }
            Token::BitwiseAnd => {
                if state.eat(b'&') {
                    if state.eat(b'=') {
                        Token::LogicalAndAssign
                    } else {
                        Token::LogicalAnd
                    }
                } else if state.eat(b'=') {
                    Token::BitwiseAndAssign
                } else {
                    Token::BitwiseAnd
                }
            }
            Token::Multiply => {
                if state.eat(b'*') {
                    if state.eat(b'=') {
                        Token::ExponentiateAssign
                    } else {
                        Token::Exponentiate
                    }
                } else if state.eat(b'=') {
                    Token::MultiplyAssign
                } else {
                    Token::Multiply
                }
            }
            Token::Add => {
                if state.eat(b'+') {
                    Token::Increment
                } else if state.eat(b'=') {
                    Token::AddAssign
                } else {
                    Token::Add
                }
            }
            Token::Subtract => {
                if state.eat(b'-') {
                    Token::Decrement
                } else if state.eat(b'=') {
                    Token::SubtractAssign
                } else {
                    Token::Subtract
                }
            }
            Token::Period => {
                if state.peek_byte(0) == Some(b'.') && state.peek_byte(1) == Some(b'.') {
                    state.index += 2;
                    Token::Ellipsis
                } else {
                    Token::Period
                }
            }
            Token::Divide => {
                if state.eat(b'=') {
                    Token::DivideAssign
                } else {
                    Token::Divide
                }
            }
            Token::LessThan => {
                if state.eat(b'<') {
                    if state.eat(b'=') {
                        Token::ShiftLeftAssign
                    } else {
                        Token::ShiftLeft
                    }
                } else if state.eat(b'=') {
                    Token::LessThanOrEqual
                } else {
                    Token::LessThan
                }
            }
            Token::Assign => {
                if state.eat(b'=') {
                    if state.eat(b'=') {
                        Token::StrictEqual
                    } else {
                        Token::LooseEqual
                    }
                } else if state.eat(b'>') {
                    Token::Arrow
                } else {
                    Token::Assign
                }
            }
            Token::GreaterThan => {
                if state.eat(b'>') {
                    if state.eat(b'>') {
                        if state.eat(b'=') {
                            Token::LogicalShiftRightAssign
                        } else {
                            Token::LogicalShiftRight
                        }
                    } else if state.eat(b'=') {
                        Token::ShiftRightAssign
                    } else {
                        Token::ShiftRight
                    }
                } else if state.eat(b'=') {
                    Token::GreaterThanOrEqual
                } else {
                    Token::GreaterThan
                }
            }
            Token::QuestionMark => {
                if state.eat(b'?') {
                    if state.eat(b'=') {
                        Token::CoalesceAssign
                    } else {
                        Token::Coalesce
                    }
                } else if state.peek_byte(0) == Some(b'.')
                    && !state.peek_byte(1).is_some_and(|b| b.is_ascii_digit())
                {
                    // `a?.5:b` is a conditional, not optional chaining.
                    state.index += 1;
                    Token::QuestionMarkPeriod
                } else {
                    Token::QuestionMark
                }
            }
            Token::BitwiseXor => {
                if state.eat(b'=') {
                    Token::BitwiseXorAssign
                } else {
                    Token::BitwiseXor
                }
            }
            Token::BitwiseOr => {
                if state.eat(b'|') {
                    if state.eat(b'=') {
                        Token::LogicalOrAssign
                    } else {
                        Token::LogicalOr
                    }
                } else if state.eat(b'=') {
                    Token::BitwiseOrAssign
                } else {
                    Token::BitwiseOr
                }
            }
            single => single,
        }
    }

    fn scan_string_literal(&mut self, quote: char, context: Context) -> ScanResult<Token> {
        self.state.advance(quote);
        loop {
            let Some(ch) = self.state.peek() else {
                return Err(
                    self.report(ScanErrorKind::UnterminatedStringLiteral, self.state.index)
                );
            };
            match ch {
                _ if ch == quote => {
                    self.state.advance(ch);
                    return Ok(Token::StringLiteral);
                }
                '\\' => {
                    let escape_start = self.state.index;
                    self.state.index += 1;
                    let Some(next) = self.state.peek() else {
                        return Err(self
                            .report(ScanErrorKind::UnterminatedStringLiteral, self.state.index));
                    };
                    if next >= ESCAPE_FAST_PATH_START && !is_unicode_line_terminator(next) {
                        self.state.advance(next);
                        self.state.push_cooked(next);
                        continue;
                    }
                    match decode_escape(&mut self.state, next, context, EscapeSite::StringLiteral)
                    {
                        Ok(Escape::Char(decoded)) => self.state.push_cooked(decoded),
                        Ok(Escape::LineContinuation) => self.state.new_line(),
                        Err(escape) => {
                            return Err(self.report(
                                ScanErrorKind::InvalidEscapeSequence(escape),
                                escape_start,
                            ));
                        }
                    }
                }
                LINE_FEED | CARRIAGE_RETURN => {
                    return Err(
                        self.report(ScanErrorKind::UnterminatedStringLiteral, self.state.index)
                    );
                }
                LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
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

    /// A number starting with `0`; `DIGIT_CLASS_KIND` decides what follows.
    fn scan_leading_zero(&mut self, context: Context) -> ScanResult<Token> {
        let start = self.state.index;
        self.state.index += 1;
        let (radix, flag) = match self.state.peek().and_then(digit_class_kind) {
            Some(Token::BinaryDigits) => (Radix::Binary, TokenFlags::BINARY_SPECIFIER),
            Some(Token::OctalDigits) => (Radix::Octal, TokenFlags::OCTAL_SPECIFIER),
            Some(Token::HexDigits) => (Radix::Hex, TokenFlags::HEX_SPECIFIER),
            Some(Token::Underscore) => {
                return Err(
                    self.report(ScanErrorKind::InvalidNumericSeparator, self.state.index)
                );
            }
            Some(Token::NumericLiteral) => return self.scan_legacy_octal(start, context),
            _ => return self.scan_decimal_rest(start),
        };

        self.state.index += 1;
        self.state.flags |= flag;
        if self.scan_digits(radix)? == 0 {
            return Err(self.report(ScanErrorKind::MissingDigits(radix), self.state.index));
        }
        let token = if self.state.eat(b'n') {
            Token::BigIntLiteral
        } else {
            Token::NumericLiteral
        };
        self.finish_number(start, token)
    }

    /// `0` followed by more digits: octal when every digit is below 8,
    /// otherwise a decimal that happens to start with zero.
    fn scan_legacy_octal(&mut self, start: usize, context: Context) -> ScanResult<Token> {
        if context.contains(Context::STRICT) {
            return Err(self.report(ScanErrorKind::LegacyOctalLiteral, start));
        }
        let digits_start = self.state.index;
        while self.state.peek_byte(0).is_some_and(|b| b.is_ascii_digit()) {
            self.state.index += 1;
        }
        let digits = self.state.slice(digits_start..self.state.index);
        if digits.bytes().all(|b| is_octal_digit(b as char)) {
            self.state.flags |= TokenFlags::OCTAL;
            self.finish_number(start, Token::NumericLiteral)
        } else {
            self.scan_decimal_rest(start)
        }
    }

    fn scan_decimal(&mut self, start: usize) -> ScanResult<Token> {
        self.scan_digits(Radix::Decimal)?;
        self.scan_decimal_rest(start)
    }

    /// Optional fraction, exponent and BigInt suffix after the integer part.
    fn scan_decimal_rest(&mut self, start: usize) -> ScanResult<Token> {
        let mut integer = true;
        if self.state.eat(b'.') {
            integer = false;
            self.scan_digits(Radix::Decimal)?;
        }
        if matches!(self.state.peek_byte(0), Some(b'e' | b'E')) {
            self.state.index += 1;
            integer = false;
            self.state.flags |= TokenFlags::SCIENTIFIC;
            if matches!(self.state.peek_byte(0), Some(b'+' | b'-')) {
                self.state.index += 1;
            }
            if self.scan_digits(Radix::Decimal)? == 0 {
                return Err(self.report(
                    ScanErrorKind::MissingDigits(Radix::Decimal),
                    self.state.index,
                ));
            }
        }
        let token = if integer && self.state.eat(b'n') {
            Token::BigIntLiteral
        } else {
            Token::NumericLiteral
        };
        self.finish_number(start, token)
    }

    /// Digits of `radix` with `_` separators between them. Returns the
    /// number of digits consumed.
    fn scan_digits(&mut self, radix: Radix) -> ScanResult<usize> {
        let mut count = 0;
        let mut after_separator = false;
        loop {
            match self.state.peek_byte(0) {
                Some(b'_') => {
                    if count == 0 || after_separator {
                        return Err(
                            self.report(ScanErrorKind::InvalidNumericSeparator, self.state.index)
                        );
                    }
                    self.state.flags |= TokenFlags::CONTAINS_SEPARATOR;
                    after_separator = true;
                    self.state.index += 1;
                }
                Some(b) if (b as char).is_digit(radix.value()) => {
                    count += 1;
                    after_separator = false;
                    self.state.index += 1;
                }
                _ => break,
            }
        }
        if after_separator {
            return Err(self.report(ScanErrorKind::InvalidNumericSeparator, self.state.index - 1));
        }
        Ok(count)
    }

    /// A number may not run straight into an identifier or another digit.
    fn finish_number(&mut self, start: usize, token: Token) -> ScanResult<Token> {
        match self.state.peek() {
            Some('_') => {
                return Err(self.report(ScanErrorKind::InvalidNumericSeparator, self.state.index));
            }
            Some(ch) if is_identifier_start(ch) || ch.is_ascii_digit() => {
                return Err(self.report(ScanErrorKind::InvalidCharacter(ch), self.state.index));
            }
            _ => {}
        }
        let text = self.state.slice(start..self.state.index);
        self.state.push_cooked_str(text);
        Ok(token)
    }

    /// Identifier or keyword; `kind` is the first character's class.
    fn scan_identifier(&mut self, kind: Token) -> ScanResult<Token> {
        let escaped = self.scan_identifier_name()?;
        if escaped {
            self.state.flags |= TokenFlags::UNICODE_ESCAPE;
        }
        if kind == Token::IdentifierOrKeyword || escaped {
            if let Some(keyword) = self.state.token_value().and_then(Keyword::lookup) {
                return Ok(Token::Keyword(keyword));
            }
        }
        Ok(Token::Identifier)
    }

    fn scan_private_name(&mut self) -> ScanResult<Token> {
        let start = self.state.index;
        self.state.index += 1;
        match self.state.peek() {
            Some(ch) if ch == '\\' || is_identifier_start(ch) => {
                self.state.push_cooked('#');
                if self.scan_identifier_name()? {
                    self.state.flags |= TokenFlags::UNICODE_ESCAPE;
                }
                Ok(Token::PrivateName)
            }
            _ => Err(self.report(ScanErrorKind::InvalidCharacter('#'), start)),
        }
    }

    /// Consume an IdentifierName into the cooked value. Returns whether any
    /// `\u` escape was used.
    fn scan_identifier_name(&mut self) -> ScanResult<bool> {
        let mut escaped = false;
        let mut first = true;
        loop {
            let Some(ch) = self.state.peek() else {
                break;
            };
            let decoded = if ch == '\\' {
                let escape_start = self.state.index;
                self.state.index += 1;
                if !self.state.eat(b'u') {
                    return Err(self.report(ScanErrorKind::InvalidCharacter('\\'), escape_start));
                }
                let decoded = match decode_unicode_escape(&mut self.state) {
                    Ok(decoded) => decoded,
                    Err(escape) => {
                        return Err(self
                            .report(ScanErrorKind::InvalidEscapeSequence(escape), escape_start));
                    }
                };
                let valid = if first {
                    is_identifier_start(decoded)
                } else {
                    is_identifier_part(decoded)
                };
                if !valid {
                    return Err(
                        self.report(ScanErrorKind::InvalidCharacter(decoded), escape_start)
                    );
                }
                escaped = true;
                decoded
            } else if (first && is_identifier_start(ch)) || (!first && is_identifier_part(ch)) {
                self.state.advance(ch);
                ch
            } else {
                break;
            };
            self.state.push_cooked(decoded);
            first = false;
        }
        Ok(escaped)
    }
}
