//! esscan_core: Source-position primitives shared by the esscan crates.
//!
//! Provides byte-offset spans and ranges plus a line map for turning
//! offsets into line/column pairs for diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
