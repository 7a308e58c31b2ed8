//! Scanner configuration.

use crate::flags::Context;

/// Options fixed for the lifetime of one scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Scan as strict mode code (modules, class bodies, `"use strict"`).
    pub strict: bool,
    /// Treat a leading `#!` line as a comment.
    pub skip_hashbang: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            strict: false,
            skip_hashbang: true,
        }
    }
}

impl ScannerOptions {
    /// Options for strict mode code.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// The context every scan request starts from.
    pub fn context(&self) -> Context {
        if self.strict {
            Context::STRICT
        } else {
            Context::NONE
        }
    }
}
