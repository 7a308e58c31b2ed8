//! Iterator over a whole source buffer.
//!
//! The bare [`Scanner`] cannot tell a `}` that closes a template
//! substitution from one that closes a block; the stream tracks brace depth
//! per open template and resumes the template itself.

use crate::error::ScanResult;
use crate::flags::Context;
use crate::options::ScannerOptions;
use crate::scanner::Scanner;
use crate::token::{Keyword, Token, TokenInfo};

/// Tokens of one source buffer, ending before `EndOfSource`. The first
/// fatal error is yielded and ends the stream.
pub struct TokenStream<'src> {
    scanner: Scanner<'src>,
    /// Brace depth and context recorded at each open `${`.
    template_stack: Vec<(usize, Context)>,
    brace_depth: usize,
    previous: Option<Token>,
    finished: bool,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    pub fn with_options(source: &'src str, options: ScannerOptions) -> Self {
        Self {
            scanner: Scanner::with_options(source, options),
            template_stack: Vec::new(),
            brace_depth: 0,
            previous: None,
            finished: false,
        }
    }

    pub fn scanner(&self) -> &Scanner<'src> {
        &self.scanner
    }

    pub fn into_scanner(self) -> Scanner<'src> {
        self.scanner
    }

    fn scan_next(&mut self) -> ScanResult<Token> {
        let context = if self.previous.is_some_and(ends_expression) {
            Context::TAGGED_TEMPLATE
        } else {
            Context::NONE
        };

        let token = match self.scanner.scan_with_context(context)? {
            Token::LeftBrace => {
                self.brace_depth += 1;
                Token::LeftBrace
            }
            Token::RightBrace => match self.template_stack.last() {
                Some(&(depth, template_context)) if depth == self.brace_depth => {
                    self.template_stack.pop();
                    let segment = self.scanner.scan_template_tail(template_context)?;
                    if segment == Token::TemplateCont {
                        self.template_stack.push((self.brace_depth, template_context));
                    }
                    segment
                }
                _ => {
                    self.brace_depth = self.brace_depth.saturating_sub(1);
                    Token::RightBrace
                }
            },
            Token::TemplateCont => {
                self.template_stack.push((self.brace_depth, context));
                Token::TemplateCont
            }
            token => token,
        };
        self.previous = Some(token);
        Ok(token)
    }
}

impl Iterator for TokenStream<'_> {
    type Item = ScanResult<TokenInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan_next() {
            Ok(Token::EndOfSource) => {
                self.finished = true;
                None
            }
            Ok(_) => Some(Ok(self.scanner.token_info())),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Whether a template right after `token` is the argument of a tag.
/// Contextual keywords (`of`, `as`, `from`, `get`, `set`, `static`,
/// `async`) are followed by an operand or a name, never a tag argument.
fn ends_expression(token: Token) -> bool {
    match token {
        Token::Identifier
        | Token::PrivateName
        | Token::StringLiteral
        | Token::NumericLiteral
        | Token::BigIntLiteral
        | Token::TemplateTail
        | Token::RightParen
        | Token::RightBracket => true,
        Token::Keyword(keyword) => matches!(
            keyword,
            Keyword::This | Keyword::Super | Keyword::Null | Keyword::True | Keyword::False
        ),
        _ => false,
    }
}
