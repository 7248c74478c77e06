//! Lexer/Scanner implementation for jlex
//!
//! `Lexer::next_token` is a pull-based dispatcher: it skips trivia, then
//! offers the input to each scanner in a fixed order (identifier, number,
//! string, operator, punctuation) and takes the first match. When nothing
//! matches it consumes one character and emits an `Error` token, so every
//! call either returns `EndOfInput` or moves the cursor forward.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::classify::{
    is_identifier_continue, is_identifier_start, is_operator_char, is_whitespace,
};
use super::cursor::{Checkpoint, Cursor};
use super::token::{Keyword, Operator, Punctuation, Span, Token, TokenKind, EOF_LEXEME};
use crate::error::LexErrorKind;

/// Outcome of a single scanner attempt
enum Scan {
    Matched(Token),
    /// Precondition failed; nothing was consumed
    NoMatch,
    /// The scanner started but could not finish; the cursor was restored
    Failed(LexErrorKind),
}

type Scanner<'a> = fn(&mut Lexer<'a>) -> Scan;

/// Lexer for Java-like source code
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Tokenize the rest of the input, ending with the `EndOfInput` token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Produce the next token
    ///
    /// Once the input is exhausted this keeps returning `EndOfInput` without
    /// touching the cursor.
    pub fn next_token(&mut self) -> Token {
        if let Err(start) = self.skip_trivia() {
            return self.error_token(start, LexErrorKind::UnterminatedBlockComment);
        }

        if self.cursor.is_at_end() {
            return self.eof_token();
        }

        let start = self.cursor.checkpoint();
        let scanners: [Scanner<'a>; 5] = [
            Self::scan_identifier,
            Self::scan_number,
            Self::scan_string,
            Self::scan_operator,
            Self::scan_punctuation,
        ];

        let mut failure = LexErrorKind::UnrecognizedCharacter;
        for scan in scanners {
            match scan(self) {
                Scan::Matched(token) => {
                    trace!(kind = %token.kind, line = token.line, column = token.column, "token");
                    return token;
                }
                Scan::NoMatch => debug_assert_eq!(self.cursor.checkpoint(), start),
                Scan::Failed(kind) => {
                    failure = kind;
                    break;
                }
            }
        }

        self.cursor.advance();
        self.error_token(start, failure)
    }

    /// Skip whitespace and comments until neither is present.
    ///
    /// An unterminated block comment is consumed to the end of input and
    /// reported as `Err` carrying the checkpoint at its opening `/*`.
    fn skip_trivia(&mut self) -> Result<(), Checkpoint> {
        loop {
            let before = self.cursor.position();
            self.cursor.eat_while(is_whitespace);
            self.skip_comment()?;
            if self.cursor.position() == before {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), Checkpoint> {
        match (self.cursor.peek(), self.cursor.peek_at(1)) {
            ('/', '/') => {
                self.cursor.eat_while(|c| c != '\n');
                Ok(())
            }
            ('/', '*') => {
                let start = self.cursor.checkpoint();
                self.cursor.advance();
                self.cursor.advance();

                loop {
                    if self.cursor.is_at_end() {
                        return Err(start);
                    }
                    if self.cursor.peek() == '*' && self.cursor.peek_at(1) == '/' {
                        self.cursor.advance();
                        self.cursor.advance();
                        return Ok(());
                    }
                    self.cursor.advance();
                }
            }
            _ => Ok(()),
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Scan {
        if !is_identifier_start(self.cursor.peek()) {
            return Scan::NoMatch;
        }

        let start = self.cursor.checkpoint();
        self.cursor.eat_while(is_identifier_continue);

        let lexeme = self.cursor.slice_from(start);
        let kind = match Keyword::lookup(lexeme) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        Scan::Matched(self.make_token(kind, lexeme.to_string(), start))
    }

    /// Scan a run of decimal digits
    fn scan_number(&mut self) -> Scan {
        if !self.cursor.peek().is_ascii_digit() {
            return Scan::NoMatch;
        }

        let start = self.cursor.checkpoint();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let lexeme = self.cursor.slice_from(start).to_string();
        Scan::Matched(self.make_token(TokenKind::Number, lexeme, start))
    }

    /// Scan a double-quoted string literal. The lexeme excludes the quotes.
    fn scan_string(&mut self) -> Scan {
        if self.cursor.peek() != '"' {
            return Scan::NoMatch;
        }

        let start = self.cursor.checkpoint();
        self.cursor.advance();
        let body = self.cursor.checkpoint();

        loop {
            if self.cursor.is_at_end() {
                self.cursor.restore(start);
                return Scan::Failed(LexErrorKind::UnterminatedString);
            }
            if self.cursor.peek() == '"' {
                break;
            }
            self.cursor.advance();
        }

        let lexeme = self.cursor.slice_from(body).to_string();
        // Consume closing quote
        self.cursor.advance();
        Scan::Matched(self.make_token(TokenKind::String, lexeme, start))
    }

    /// Scan the longest operator at the cursor
    fn scan_operator(&mut self) -> Scan {
        if !is_operator_char(self.cursor.peek()) {
            return Scan::NoMatch;
        }

        let lookahead = [
            self.cursor.peek_at(0),
            self.cursor.peek_at(1),
            self.cursor.peek_at(2),
            self.cursor.peek_at(3),
        ];
        let Some(op) = Operator::munch(lookahead) else {
            return Scan::NoMatch;
        };

        let start = self.cursor.checkpoint();
        for _ in 0..op.len() {
            self.cursor.advance();
        }
        Scan::Matched(self.make_token(TokenKind::Operator(op), op.as_str().to_string(), start))
    }

    fn scan_punctuation(&mut self) -> Scan {
        let Some(punct) = Punctuation::from_char(self.cursor.peek()) else {
            return Scan::NoMatch;
        };

        let start = self.cursor.checkpoint();
        self.cursor.advance();
        Scan::Matched(self.make_token(TokenKind::Punctuation(punct), punct.as_char().to_string(), start))
    }

    /// Build a token spanning from `start` to the cursor
    fn make_token(&self, kind: TokenKind, lexeme: String, start: Checkpoint) -> Token {
        Token::new(
            kind,
            lexeme,
            start.line(),
            start.column(),
            Span::new(start.position(), self.cursor.position()),
        )
    }

    fn error_token(&self, start: Checkpoint, kind: LexErrorKind) -> Token {
        let lexeme = self.cursor.slice_from(start).to_string();
        debug!(
            reason = %kind,
            lexeme = %lexeme.escape_debug(),
            line = start.line(),
            column = start.column(),
            "error token"
        );
        self.make_token(TokenKind::Error(kind), lexeme, start)
    }

    fn eof_token(&self) -> Token {
        let here = self.cursor.checkpoint();
        self.make_token(TokenKind::EndOfInput, EOF_LEXEME.to_string(), here)
    }
}

/// Yields tokens up to, but not including, `EndOfInput`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    const FRAGMENTS: &[&str] = &[
        "int", "while", "x", "$y", "_z9", "0", "42", " ", "\t", "\n", "\r\n", "\"s t\"", "\"",
        "//c", "/*", "*/", "/", "*", ">", ">>>=", "<<", "=", "!", "&", "|", ":", "?", "~", "(",
        ")", "{", ";", ".", "@", "#", "é", "\0", "\\",
    ];

    fn source_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(FRAGMENTS), 0..40)
            .prop_map(|parts| parts.concat())
    }

    /// Source text a token was scanned from
    fn covered_text(token: &Token) -> String {
        match token.kind {
            TokenKind::String => format!("\"{}\"", token.lexeme),
            TokenKind::EndOfInput => String::new(),
            _ => token.lexeme.clone(),
        }
    }

    fn location_of(source: &str, offset: usize) -> (usize, usize) {
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].chars().count() + 1)
    }

    proptest! {
        #[test]
        fn tokens_and_trivia_reconstruct_the_source(source in source_strategy()) {
            let tokens = Lexer::new(&source).tokenize();
            let mut rebuilt = String::new();
            let mut previous_end = 0;

            for token in &tokens {
                let trivia = &source[previous_end..token.span.start];
                // trivia alone lexes to nothing
                prop_assert_eq!(Lexer::new(trivia).count(), 0, "trivia {:?}", trivia);
                rebuilt.push_str(trivia);

                prop_assert_eq!(&source[token.span.start..token.span.end], covered_text(token));
                rebuilt.push_str(&covered_text(token));
                previous_end = token.span.end;
            }

            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn every_call_makes_progress(source in source_strategy()) {
            let mut lexer = Lexer::new(&source);
            let mut last = lexer.position();
            loop {
                let token = lexer.next_token();
                if token.is_eof() {
                    break;
                }
                prop_assert!(!token.lexeme.is_empty());
                prop_assert!(lexer.position() > last);
                last = lexer.position();
            }

            let settled = lexer.position();
            for _ in 0..3 {
                prop_assert!(lexer.next_token().is_eof());
                prop_assert_eq!(lexer.position(), settled);
            }
        }

        #[test]
        fn positions_match_source_offsets(source in source_strategy()) {
            for token in Lexer::new(&source).tokenize() {
                prop_assert_eq!(
                    (token.line, token.column),
                    location_of(&source, token.span.start)
                );
            }
        }

        #[test]
        fn identifier_shaped_words_classify_exactly(word in "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}") {
            let tokens = Lexer::new(&word).tokenize();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].lexeme, &word);
            let expected = match Keyword::lookup(&word) {
                Some(keyword) => TokenKind::Keyword(keyword),
                None => TokenKind::Identifier,
            };
            prop_assert_eq!(tokens[0].kind, expected);
        }
    }
}
