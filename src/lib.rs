//! KAY lexical analyzer
//!
//! Converts KAY source text into a linear sequence of classified tokens.
//! Scanning is pull-based: each `TokenStream::next_token` call returns
//! one token, the last of which is the `EndOfStream` sentinel. Malformed
//! lexemes are tagged `Other` instead of being reported as errors.

pub mod driver;
pub mod lexer;

// Re-export commonly used types
pub use driver::{Driver, ScanReport};
pub use lexer::{CharSource, SourceError, Token, TokenKind, TokenStream};
