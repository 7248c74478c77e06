//! One-token lookahead over the lexer
//!
//! The stream owns its lexer and holds exactly one lookahead token. Tokens
//! it hands out are moved to the caller; superseded tokens the caller never
//! asked for are dropped.

use crate::error::{JlexError, JlexResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// Token consumer used by the parser
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> TokenStream<'a> {
    /// Create a stream and prime the lookahead
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// The lookahead token
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Move to the next token, returning the one just passed over
    ///
    /// At the end of input the lookahead stays `EndOfInput`.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Whether the lookahead has exactly `kind`
    pub fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    /// Consume the lookahead if it has exactly `kind`
    pub fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume and return the lookahead, which must have exactly `kind`
    pub fn expect(&mut self, kind: &TokenKind) -> JlexResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        if let Some(error) = self.current.to_error() {
            return Err(error);
        }

        Err(JlexError::parse_error(
            format!("expected {}, found {}", kind, self.current.kind),
            self.current.location(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;
    use crate::lexer::{Keyword, Operator, Punctuation};

    fn stream(source: &str) -> TokenStream<'_> {
        TokenStream::new(Lexer::new(source))
    }

    #[test]
    fn test_primes_lookahead() {
        let tokens = stream("int x");
        assert_eq!(tokens.current().kind, TokenKind::Keyword(Keyword::Int));
        assert!(!tokens.is_at_end());
    }

    #[test]
    fn test_advance_hands_back_superseded_token() {
        let mut tokens = stream("a b");
        let a = tokens.advance();
        assert_eq!(a.lexeme, "a");
        assert_eq!(tokens.current().lexeme, "b");

        let b = tokens.advance();
        assert_eq!(b.lexeme, "b");
        assert!(tokens.is_at_end());

        // stays at end
        let eof = tokens.advance();
        assert!(eof.is_eof());
        assert!(tokens.is_at_end());
    }

    #[test]
    fn test_check_compares_exact_kind() {
        let tokens = stream("+=");
        assert!(tokens.check(&TokenKind::Operator(Operator::PlusAssign)));
        assert!(!tokens.check(&TokenKind::Operator(Operator::Plus)));
    }

    #[test]
    fn test_matches_consumes_only_on_success() {
        let mut tokens = stream("( x");
        assert!(!tokens.matches(&TokenKind::Identifier));
        assert!(tokens.matches(&TokenKind::Punctuation(Punctuation::LeftParen)));
        assert!(tokens.matches(&TokenKind::Identifier));
        assert!(tokens.is_at_end());
    }

    #[test]
    fn test_expect_declaration() {
        let mut tokens = stream("int count = 10;");
        tokens.expect(&TokenKind::Keyword(Keyword::Int)).unwrap();
        let name = tokens.expect(&TokenKind::Identifier).unwrap();
        assert_eq!(name.lexeme, "count");
        tokens.expect(&TokenKind::Operator(Operator::Assign)).unwrap();
        let value = tokens.expect(&TokenKind::Number).unwrap();
        assert_eq!(value.lexeme, "10");
        tokens.expect(&TokenKind::Punctuation(Punctuation::Semicolon)).unwrap();
        tokens.expect(&TokenKind::EndOfInput).unwrap();
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let mut tokens = stream("int\n  42");
        tokens.advance();
        let err = tokens.expect(&TokenKind::Identifier).unwrap_err();
        assert_eq!(err.kind(), "Parse Error");
        assert_eq!(err.to_string(), "expected identifier, found number at 2:3");
        // lookahead untouched
        assert_eq!(tokens.current().lexeme, "42");
    }

    #[test]
    fn test_expect_surfaces_lex_errors() {
        let mut tokens = stream("#");
        let err = tokens.expect(&TokenKind::Identifier).unwrap_err();
        match err {
            JlexError::Lex { kind, lexeme, .. } => {
                assert_eq!(kind, LexErrorKind::UnrecognizedCharacter);
                assert_eq!(lexeme, "#");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
