//! Character cursor over borrowed source text
//!
//! The cursor owns the read position and the line/column counters. All
//! lookahead goes through `peek_at`, which is bounds-checked and yields
//! `EOF_CHAR` past the end of input.

/// Value returned by `peek`/`peek_at` at or past the end of input
pub const EOF_CHAR: char = '\0';

/// Saved cursor state, produced by `Cursor::checkpoint`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    line: usize,
    column: usize,
}

impl Checkpoint {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// Read position over a source buffer
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset, always on a character boundary
    position: usize,
    /// Line number (1-based)
    line: usize,
    /// Column number (1-based, in characters)
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current character, or `EOF_CHAR` at the end
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// Character `k` positions ahead, or `EOF_CHAR` past the end
    pub fn peek_at(&self, k: usize) -> char {
        self.rest().chars().nth(k).unwrap_or(EOF_CHAR)
    }

    /// Consume one character. No-op at the end of input.
    pub fn advance(&mut self) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consume characters while `predicate` holds
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind to a checkpoint taken earlier on this cursor
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.position <= self.position);
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    /// Source text consumed since `checkpoint`
    pub fn slice_from(&self, checkpoint: Checkpoint) -> &'a str {
        &self.source[checkpoint.position..self.position]
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), 'a');
        assert_eq!(cursor.peek_at(1), 'b');
        assert_eq!(cursor.peek_at(2), EOF_CHAR);
        assert_eq!(cursor.peek_at(100), EOF_CHAR);

        cursor.advance();
        assert_eq!(cursor.peek(), 'b');
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        assert!(cursor.is_at_end());
        let before = cursor.checkpoint();

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.checkpoint(), before);
        assert_eq!(cursor.peek(), EOF_CHAR);
    }

    #[test]
    fn test_newline_tracking() {
        let mut cursor = Cursor::new("a\nbc");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let mut cursor = Cursor::new("\r\nx");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é1");
        assert_eq!(cursor.peek(), 'é');
        assert_eq!(cursor.peek_at(1), '1');
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.peek(), '1');
    }

    #[test]
    fn test_nul_in_source_is_not_the_end() {
        let cursor = Cursor::new("\0");
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut cursor = Cursor::new("abc\ndef");
        cursor.advance();
        let checkpoint = cursor.checkpoint();

        cursor.eat_while(|c| c != 'e');
        assert_eq!(cursor.slice_from(checkpoint), "bc\nd");
        assert_eq!(cursor.line(), 2);

        cursor.restore(checkpoint);
        assert_eq!(cursor.position(), 1);
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        assert_eq!(cursor.peek(), 'b');
    }

    #[test]
    fn test_eat_while_stops_at_end() {
        let mut cursor = Cursor::new("123");
        cursor.eat_while(|c| c.is_ascii_digit());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.column(), 4);
    }
}
