//! esscan_scanner: Lexer for ECMAScript source text.
//!
//! Produces tokens from source text with full support for:
//! - Template literals, including tagged templates with invalid escapes
//! - String literals and the shared escape decoder
//! - Numeric literals (binary, octal, hex, legacy octal, BigInt, separators)
//! - Unicode identifiers, keywords and private names
//! - Comments, hashbang lines and line tracking

pub mod char_codes;
mod error;
mod escape;
mod flags;
mod options;
mod scanner;
mod state;
mod stream;
pub mod tables;
mod template;
mod token;

pub use error::{EscapeError, Radix, ScanError, ScanErrorKind, ScanResult};
pub use escape::Escape;
pub use flags::{Context, TokenFlags};
pub use options::ScannerOptions;
pub use scanner::Scanner;
pub use state::ScannerState;
pub use stream::TokenStream;
pub use tables::{digit_class_kind, first_char_kind, DIGIT_CLASS_KIND, FIRST_CHAR_KIND};
pub use token::{Keyword, Token, TokenInfo};
