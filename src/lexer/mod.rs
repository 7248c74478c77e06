//! Lexical analysis module
//!
//! This module turns Java-like source text into a stream of tokens.

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::{Checkpoint, Cursor, EOF_CHAR};
pub use scanner::Lexer;
pub use token::{Keyword, Operator, Punctuation, Span, Token, TokenKind, EOF_LEXEME};
