//! Bit sets carried alongside tokens and scan requests.

bitflags::bitflags! {
    /// Facts about the most recently scanned token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                    = 0;
        const PRECEDING_LINE_BREAK    = 1 << 0;
        /// Identifier or keyword spelled with a `\u` escape.
        const UNICODE_ESCAPE          = 1 << 1;
        /// Legacy octal numeric literal such as `017`.
        const OCTAL                   = 1 << 2;
        const HEX_SPECIFIER           = 1 << 3;
        const BINARY_SPECIFIER        = 1 << 4;
        const OCTAL_SPECIFIER         = 1 << 5;
        const SCIENTIFIC              = 1 << 6;
        const CONTAINS_SEPARATOR      = 1 << 7;
        /// Tagged template segment whose cooked value was abandoned.
        const CONTAINS_INVALID_ESCAPE = 1 << 8;
    }
}

bitflags::bitflags! {
    /// Grammar context a scan request is made in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Context: u8 {
        const NONE            = 0;
        /// Strict mode code: legacy octal literals and escapes are errors.
        const STRICT          = 1 << 0;
        /// The template being scanned is the argument of a tag, so invalid
        /// escapes abandon the cooked value instead of failing the scan.
        const TAGGED_TEMPLATE = 1 << 1;
    }
}
