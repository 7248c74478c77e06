//! Parser module
//!
//! Only the token-consuming side of the parser lives here: a one-token
//! lookahead over the lexer with the usual `advance`/`matches`/`expect`
//! helpers.

pub mod stream;

pub use stream::TokenStream;
