//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes various ECMAScript constructs.

use esscan_scanner::{
    Keyword, ScanErrorKind, Scanner, ScannerOptions, Token, TokenFlags, TokenStream,
};
use pretty_assertions::assert_eq;

/// Helper: scan all tokens from source and return as (kind, value) pairs.
fn scan_all(source: &str) -> Vec<(Token, String)> {
    TokenStream::new(source)
        .map(|info| {
            let info = info.unwrap();
            (info.kind, info.value.unwrap_or_default())
        })
        .collect()
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<Token> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.scan(), Ok(Token::EndOfSource));
    assert_eq!(scanner.token_raw(), "");
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all("   \n\t \u{2029} \u{feff} ").is_empty());
}

#[test]
fn test_numeric_literals() {
    assert_eq!(
        scan_all("42 3.14 0xFF 0b1010 0o77 1e-7 10n"),
        vec![
            (Token::NumericLiteral, "42".to_string()),
            (Token::NumericLiteral, "3.14".to_string()),
            (Token::NumericLiteral, "0xFF".to_string()),
            (Token::NumericLiteral, "0b1010".to_string()),
            (Token::NumericLiteral, "0o77".to_string()),
            (Token::NumericLiteral, "1e-7".to_string()),
            (Token::BigIntLiteral, "10n".to_string()),
        ]
    );
}

#[test]
fn test_string_literals() {
    assert_eq!(
        scan_all(r#""hello" 'world' "tab\there" 'line\
cont'"#),
        vec![
            (Token::StringLiteral, "hello".to_string()),
            (Token::StringLiteral, "world".to_string()),
            (Token::StringLiteral, "tab\there".to_string()),
            (Token::StringLiteral, "linecont".to_string()),
        ]
    );
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo bar baz _private $dollar");
    assert_eq!(tokens.len(), 5);
    for (kind, _) in &tokens {
        assert_eq!(*kind, Token::Identifier);
    }
    assert_eq!(tokens[0].1, "foo");
    assert_eq!(tokens[3].1, "_private");
    assert_eq!(tokens[4].1, "$dollar");
}

#[test]
fn test_keywords() {
    let source = "if else while for return function class interface yield enum";
    assert_eq!(
        scan_kinds(source),
        vec![
            Token::Keyword(Keyword::If),
            Token::Keyword(Keyword::Else),
            Token::Keyword(Keyword::While),
            Token::Keyword(Keyword::For),
            Token::Keyword(Keyword::Return),
            Token::Keyword(Keyword::Function),
            Token::Keyword(Keyword::Class),
            Token::Keyword(Keyword::Interface),
            Token::Keyword(Keyword::Yield),
            Token::Keyword(Keyword::Enum),
        ]
    );
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    assert_eq!(
        scan_kinds("iff lets kind unicorn zed"),
        vec![Token::Identifier; 5]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        scan_kinds("( ) { } [ ] ; , . : ?"),
        vec![
            Token::LeftParen,
            Token::RightParen,
            Token::LeftBrace,
            Token::RightBrace,
            Token::LeftBracket,
            Token::RightBracket,
            Token::Semicolon,
            Token::Comma,
            Token::Period,
            Token::Colon,
            Token::QuestionMark,
        ]
    );
}

#[test]
fn test_maximal_munch_without_spaces() {
    assert_eq!(
        scan_kinds("a>>>=b!==c"),
        vec![
            Token::Identifier,
            Token::LogicalShiftRightAssign,
            Token::Identifier,
            Token::StrictNotEqual,
            Token::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("x+++y"),
        vec![Token::Identifier, Token::Increment, Token::Add, Token::Identifier]
    );
}

#[test]
fn test_every_punctuator_round_trips() {
    let punctuators = [
        "!", "!=", "!==", "%", "%=", "&", "&&", "&&=", "&=", "(", ")", "*", "*=", "**", "**=",
        "+", "++", "+=", ",", "-", "--", "-=", ".", "...", "/", "/=", ":", ";", "<", "<<", "<<=",
        "<=", "=", "==", "===", "=>", ">", ">=", ">>", ">>=", ">>>", ">>>=", "?", "?.", "??",
        "??=", "[", "]", "^", "^=", "{", "|", "||", "||=", "|=", "}", "~",
    ];
    for text in punctuators {
        let mut scanner = Scanner::new(text);
        let token = scanner.scan().unwrap();
        assert_eq!(token.punctuator_text(), Some(text));
        assert_eq!(scanner.scan(), Ok(Token::EndOfSource), "{text}");
    }
}

#[test]
fn test_comments_and_line_breaks() {
    let tokens: Vec<_> = TokenStream::new("a /* x */ b // c\nd")
        .map(Result::unwrap)
        .collect();
    assert_eq!(tokens.len(), 3);
    assert!(!tokens[1].has_preceding_line_break());
    assert!(tokens[2].has_preceding_line_break());
    assert_eq!(tokens[2].range.pos, 17);
}

#[test]
fn test_line_counting_mixed_terminators() {
    let mut scanner = Scanner::new("a\r\nb\rc\nd\u{2028}e");
    while scanner.scan().unwrap() != Token::EndOfSource {}
    assert_eq!(scanner.line(), 4);
}

#[test]
fn test_strict_mode_options() {
    let strict = ScannerOptions::strict();
    let err = TokenStream::with_options("x = 010", strict)
        .find_map(Result::err)
        .unwrap();
    assert_eq!(err.kind, ScanErrorKind::LegacyOctalLiteral);
    assert_eq!(err.pos, 4);

    let flags: Vec<_> = TokenStream::new("x = 010")
        .map(|info| info.unwrap().flags)
        .collect();
    assert_eq!(flags[2], TokenFlags::OCTAL);
}

#[test]
fn test_error_ends_stream_and_is_recorded() {
    let mut stream = TokenStream::new("a\n  b @ c");
    assert!(stream.next().unwrap().is_ok());
    assert!(stream.next().unwrap().is_ok());
    let err = stream.next().unwrap().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::InvalidCharacter('@'));
    assert_eq!(err.to_string(), "invalid character '@' at 2:5");
    assert!(stream.next().is_none());

    let diagnostics = stream.scanner().diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.diagnostics()[0].code, 1127);
}

#[test]
fn test_realistic_module() {
    let source = r#"import { join } from "path";
export async function render(name, count = 0x10) {
  const label = `${name}: ${count ?? 1_000}`;
  return html`<p class="${label}">\unicode</p>`;
}
"#;
    let tokens: Vec<_> = TokenStream::new(source).map(Result::unwrap).collect();
    let templates: Vec<_> = tokens
        .iter()
        .filter(|info| info.kind.is_template())
        .map(|info| (info.kind, info.value.clone(), info.raw.clone()))
        .collect();
    assert_eq!(
        templates,
        vec![
            (Token::TemplateCont, Some(String::new()), String::new()),
            (Token::TemplateCont, Some(": ".to_string()), ": ".to_string()),
            (Token::TemplateTail, Some(String::new()), String::new()),
            (
                Token::TemplateCont,
                Some("<p class=\"".to_string()),
                "<p class=\"".to_string()
            ),
            (Token::TemplateTail, None, "\">\\unicode</p>".to_string()),
        ]
    );
    assert_eq!(tokens.last().map(|info| info.kind), Some(Token::RightBrace));
}
