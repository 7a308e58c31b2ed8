//! Token kinds and the per-token information handed to the parser.

use crate::flags::TokenFlags;
use esscan_core::TextRange;
use std::fmt;

/// Classification of a token, or of a character that starts one.
///
/// The same enumeration serves the dispatch tables (where kinds such as
/// `LeadingZero` or `IdentifierOrKeyword` are provisional) and the
/// finished token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Control
    Error,
    WhiteSpace,
    LineFeed,
    CarriageReturn,
    EndOfSource,

    // Literals and names
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    LeadingZero,
    Identifier,
    IdentifierOrKeyword,
    EscapedIdentifier,
    PrivateName,
    Keyword(Keyword),

    // Character after a leading `0`
    BinaryDigits,
    OctalDigits,
    HexDigits,
    Underscore,

    // Templates
    /// Segment closed by a backtick.
    TemplateTail,
    /// Segment closed by `${`.
    TemplateCont,

    // Punctuators
    Negate,
    NotEqual,
    StrictNotEqual,
    Modulo,
    ModuloAssign,
    BitwiseAnd,
    BitwiseAndAssign,
    LogicalAnd,
    LogicalAndAssign,
    LeftParen,
    RightParen,
    Multiply,
    MultiplyAssign,
    Exponentiate,
    ExponentiateAssign,
    Add,
    AddAssign,
    Increment,
    Comma,
    Subtract,
    SubtractAssign,
    Decrement,
    Period,
    Ellipsis,
    Divide,
    DivideAssign,
    Colon,
    Semicolon,
    LessThan,
    LessThanOrEqual,
    ShiftLeft,
    ShiftLeftAssign,
    Assign,
    LooseEqual,
    StrictEqual,
    Arrow,
    GreaterThan,
    GreaterThanOrEqual,
    ShiftRight,
    ShiftRightAssign,
    LogicalShiftRight,
    LogicalShiftRightAssign,
    QuestionMark,
    QuestionMarkPeriod,
    Coalesce,
    CoalesceAssign,
    LeftBracket,
    RightBracket,
    BitwiseXor,
    BitwiseXorAssign,
    LeftBrace,
    RightBrace,
    BitwiseOr,
    BitwiseOrAssign,
    LogicalOr,
    LogicalOrAssign,
    Complement,
}

impl Token {
    /// Whether this is one of the two template segment kinds.
    #[inline]
    pub fn is_template(self) -> bool {
        matches!(self, Token::TemplateTail | Token::TemplateCont)
    }

    /// Source spelling of a punctuator, `None` for every other kind.
    pub fn punctuator_text(self) -> Option<&'static str> {
        let text = match self {
            Token::Negate => "!",
            Token::NotEqual => "!=",
            Token::StrictNotEqual => "!==",
            Token::Modulo => "%",
            Token::ModuloAssign => "%=",
            Token::BitwiseAnd => "&",
            Token::BitwiseAndAssign => "&=",
            Token::LogicalAnd => "&&",
            Token::LogicalAndAssign => "&&=",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Multiply => "*",
            Token::MultiplyAssign => "*=",
            Token::Exponentiate => "**",
            Token::ExponentiateAssign => "**=",
            Token::Add => "+",
            Token::AddAssign => "+=",
            Token::Increment => "++",
            Token::Comma => ",",
            Token::Subtract => "-",
            Token::SubtractAssign => "-=",
            Token::Decrement => "--",
            Token::Period => ".",
            Token::Ellipsis => "...",
            Token::Divide => "/",
            Token::DivideAssign => "/=",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::LessThan => "<",
            Token::LessThanOrEqual => "<=",
            Token::ShiftLeft => "<<",
            Token::ShiftLeftAssign => "<<=",
            Token::Assign => "=",
            Token::LooseEqual => "==",
            Token::StrictEqual => "===",
            Token::Arrow => "=>",
            Token::GreaterThan => ">",
            Token::GreaterThanOrEqual => ">=",
            Token::ShiftRight => ">>",
            Token::ShiftRightAssign => ">>=",
            Token::LogicalShiftRight => ">>>",
            Token::LogicalShiftRightAssign => ">>>=",
            Token::QuestionMark => "?",
            Token::QuestionMarkPeriod => "?.",
            Token::Coalesce => "??",
            Token::CoalesceAssign => "??=",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::BitwiseXor => "^",
            Token::BitwiseXorAssign => "^=",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::BitwiseOr => "|",
            Token::BitwiseOrAssign => "|=",
            Token::LogicalOr => "||",
            Token::LogicalOrAssign => "||=",
            Token::Complement => "~",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.punctuator_text()) {
            (_, Some(text)) => write!(f, "'{}'", text),
            (Token::Keyword(keyword), None) => write!(f, "keyword '{}'", keyword.as_str()),
            (other, None) => write!(f, "{:?}", other),
        }
    }
}

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// Reserved words plus the contextual words a parser asks about.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Look up a keyword by its exact spelling.
            pub fn lookup(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    As => "as",
    Async => "async",
    Await => "await",
    Break => "break",
    Case => "case",
    Catch => "catch",
    Class => "class",
    Const => "const",
    Continue => "continue",
    Debugger => "debugger",
    Default => "default",
    Delete => "delete",
    Do => "do",
    Else => "else",
    Enum => "enum",
    Export => "export",
    Extends => "extends",
    False => "false",
    Finally => "finally",
    For => "for",
    From => "from",
    Function => "function",
    Get => "get",
    If => "if",
    Implements => "implements",
    Import => "import",
    In => "in",
    Instanceof => "instanceof",
    Interface => "interface",
    Let => "let",
    New => "new",
    Null => "null",
    Of => "of",
    Package => "package",
    Private => "private",
    Protected => "protected",
    Public => "public",
    Return => "return",
    Set => "set",
    Static => "static",
    Super => "super",
    Switch => "switch",
    This => "this",
    Throw => "throw",
    True => "true",
    Try => "try",
    Typeof => "typeof",
    Var => "var",
    Void => "void",
    While => "while",
    With => "with",
    Yield => "yield",
}

/// Information about a scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub kind: Token,
    /// Source range of the whole token, delimiters included.
    pub range: TextRange,
    /// Cooked value. `None` only for a tagged template segment with an
    /// invalid escape.
    pub value: Option<String>,
    /// Verbatim source text. For template segments this excludes the
    /// delimiters.
    pub raw: String,
    pub flags: TokenFlags,
}

impl TokenInfo {
    /// Whether there was a line break before this token.
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }
}
