//! Template literal integration tests.

use esscan_scanner::{Context, EscapeError, ScanErrorKind, Scanner, ScannerOptions, Token, TokenFlags};
use pretty_assertions::assert_eq;

fn segment(source: &str, context: Context) -> (Token, Option<String>, String) {
    let mut scanner = Scanner::new(source);
    let token = scanner.scan_template(context).unwrap();
    (
        token,
        scanner.token_value().map(str::to_owned),
        scanner.token_raw().to_owned(),
    )
}

#[test]
fn test_plain_text_cooks_to_raw() {
    assert_eq!(
        segment("`abc`", Context::NONE),
        (Token::TemplateTail, Some("abc".into()), "abc".into())
    );
    assert_eq!(
        segment("``", Context::NONE),
        (Token::TemplateTail, Some(String::new()), String::new())
    );
}

#[test]
fn test_substitution_leaves_cursor_past_brace() {
    let mut scanner = Scanner::new("`x${y}`");
    assert_eq!(scanner.scan_template(Context::NONE), Ok(Token::TemplateCont));
    assert_eq!(scanner.token_value(), Some("x"));
    assert_eq!(scanner.token_raw(), "x");
    assert_eq!(scanner.token_end(), 4);
    assert_eq!(scanner.scan(), Ok(Token::Identifier));
    assert_eq!(scanner.token_value(), Some("y"));
}

#[test]
fn test_unterminated_is_fatal() {
    let mut scanner = Scanner::new("`abc");
    let err = scanner.scan_template(Context::NONE).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEndOfInput);
    assert_eq!(scanner.token(), Token::Error);

    let mut scanner = Scanner::new("`abc\\");
    let err = scanner.scan_template(Context::NONE).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos, 5);
}

#[test]
fn test_crlf_counts_once() {
    let mut scanner = Scanner::new("`a\r\nb`");
    assert_eq!(scanner.scan_template(Context::NONE), Ok(Token::TemplateTail));
    assert_eq!(scanner.token_value(), Some("a\nb"));
    assert_eq!(scanner.token_raw(), "a\r\nb");
    assert_eq!(scanner.line(), 1);
    assert_eq!(scanner.column(), 2);
}

#[test]
fn test_unicode_line_terminators_cook_verbatim() {
    let mut scanner = Scanner::new("`a\u{2028}b\u{2029}c`");
    assert_eq!(scanner.scan_template(Context::NONE), Ok(Token::TemplateTail));
    assert_eq!(scanner.token_value(), Some("a\u{2028}b\u{2029}c"));
    assert_eq!(scanner.line(), 2);

    let mut scanner = Scanner::new("`a\\\u{2028}b`");
    assert_eq!(scanner.scan_template(Context::NONE), Ok(Token::TemplateTail));
    assert_eq!(scanner.token_value(), Some("ab"));
    assert_eq!(scanner.line(), 1);
}

#[test]
fn test_valid_escapes_lose_nothing() {
    assert_eq!(
        segment(r"`\t\v\f\b\0\x7eé\u{1F600}😀`", Context::NONE).1,
        Some("\t\u{b}\u{c}\u{8}\0~\u{e9}\u{1F600}\u{1F600}".into())
    );
}

#[test]
fn test_every_invalid_escape_is_fatal_untagged() {
    let cases = [
        (r"`\x4`", EscapeError::InvalidHex),
        (r"`\u12`", EscapeError::InvalidUnicode),
        (r"`\u{}`", EscapeError::InvalidUnicode),
        (r"`\u{110000}`", EscapeError::UnicodeOverflow),
        (r"`\01`", EscapeError::TemplateOctal),
        (r"`\7`", EscapeError::TemplateOctal),
        (r"`\8`", EscapeError::EightOrNine('8')),
    ];
    for (source, escape) in cases {
        let mut scanner = Scanner::new(source);
        let err = scanner.scan_template(Context::NONE).unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::InvalidEscapeSequence(escape), "{source}");
        assert_eq!(err.pos, 1, "{source}");
        assert_eq!(scanner.diagnostics().len(), 1);
    }
}

#[test]
fn test_every_invalid_escape_is_recovered_tagged() {
    for source in [r"`\x4`", r"`\u12`", r"`\u{110000}`", r"`\01`", r"`\8`"] {
        let (token, cooked, raw) = segment(source, Context::TAGGED_TEMPLATE);
        assert_eq!(token, Token::TemplateTail, "{source}");
        assert_eq!(cooked, None, "{source}");
        assert_eq!(raw, &source[1..source.len() - 1]);
    }
}

#[test]
fn test_recovery_honours_escaped_delimiters() {
    let (token, cooked, raw) = segment(r"`\xg \` \${ $ x${", Context::TAGGED_TEMPLATE);
    assert_eq!(token, Token::TemplateCont);
    assert_eq!(cooked, None);
    assert_eq!(raw, r"\xg \` \${ $ x");
}

#[test]
fn test_recovery_tracks_lines() {
    let mut scanner = Scanner::new("`\\u{zz}\r\n\n\r`\nnext");
    assert_eq!(
        scanner.scan_template(Context::TAGGED_TEMPLATE),
        Ok(Token::TemplateTail)
    );
    assert_eq!(scanner.line(), 3);
    assert_eq!(scanner.scan(), Ok(Token::Identifier));
    assert_eq!(scanner.line(), 4);
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_cooked_value_restarts_after_abandoned_segment() {
    let mut scanner = Scanner::new(r"`\unope${x}fine`");
    assert_eq!(
        scanner.scan_template(Context::TAGGED_TEMPLATE),
        Ok(Token::TemplateCont)
    );
    assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
    assert_eq!(scanner.scan(), Ok(Token::Identifier));
    assert_eq!(scanner.scan(), Ok(Token::RightBrace));
    assert_eq!(
        scanner.scan_template_tail(Context::TAGGED_TEMPLATE),
        Ok(Token::TemplateTail)
    );
    assert_eq!(scanner.token_value(), Some("fine"));
    assert!(!scanner.token_flags().contains(TokenFlags::CONTAINS_INVALID_ESCAPE));
}

#[test]
fn test_strict_option_applies_to_templates() {
    let mut scanner = Scanner::with_options("`\\0`", ScannerOptions::strict());
    assert_eq!(scanner.scan_template(Context::NONE), Ok(Token::TemplateTail));
    assert_eq!(scanner.token_value(), Some("\0"));
}

#[test]
fn test_tail_segment_span_starts_at_brace() {
    let mut scanner = Scanner::new("`a${b}cd`");
    scanner.scan().unwrap();
    scanner.scan().unwrap();
    scanner.scan().unwrap();
    assert_eq!(scanner.scan_template_tail(Context::NONE), Ok(Token::TemplateTail));
    let info = scanner.token_info();
    assert_eq!((info.range.pos, info.range.end), (5, 9));
    assert_eq!(info.raw, "cd");
}
