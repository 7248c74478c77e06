//! # jlex
//!
//! Lexical front end for a Java-like source language.
//!
//! ## Architecture
//!
//! - `lexer`: cursor, character classes, token types and the scanner
//! - `parser`: the token-consuming side of a parser (one-token lookahead)
//! - `error`: error types and diagnostic formatting
//! - `logging`: tracing subscriber setup for the binary
//!
//! Lexing never fails as a whole: malformed input shows up as `Error`
//! tokens in the stream and the consumer decides what to do with them.

pub mod error;
pub mod lexer;
pub mod logging;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, JlexError, JlexResult, LexErrorKind, SourceLocation};
pub use lexer::{Keyword, Lexer, Operator, Punctuation, Span, Token, TokenKind};
pub use parser::TokenStream;

/// Version of jlex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a whole source buffer, ending with the `EndOfInput` token
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
