//! Error handling and diagnostics for jlex
//!
//! Lexical malformations travel through the token stream as `Error` tokens;
//! this module gives them (and the errors raised by token consumers) a
//! reportable form.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for jlex operations
pub type JlexResult<T> = Result<T, JlexError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Why the lexer produced an `Error` token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// No scanner accepts the character.
    #[error("unrecognized character")]
    UnrecognizedCharacter,

    /// End of input reached before the closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// End of input reached before the closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

/// Main error type for jlex
#[derive(Error, Debug)]
pub enum JlexError {
    /// A lexical malformation, lifted out of an `Error` token
    #[error("{kind} '{}' at {location}", .lexeme.escape_debug())]
    Lex {
        kind: LexErrorKind,
        lexeme: String,
        location: SourceLocation,
    },

    /// A token consumer found something it did not expect
    #[error("{message} at {location}")]
    Parse {
        message: String,
        location: SourceLocation,
    },

    /// Reading source text failed
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl JlexError {
    /// Create a new lexer error
    pub fn lex_error(kind: LexErrorKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self::Lex {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Parse {
            message: message.into(),
            location,
        }
    }

    /// Create an I/O error for the given path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a filename to the error's location, if it has one
    pub fn with_filename(mut self, filename: &str) -> Self {
        match &mut self {
            Self::Lex { location, .. } | Self::Parse { location, .. } => {
                location.filename = Some(filename.to_string());
            }
            Self::Io { .. } => {}
        }
        self
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::Lex { .. } => "Lexer Error",
            Self::Parse { .. } => "Parse Error",
            Self::Io { .. } => "I/O Error",
        }
    }

    /// Get the error message without the location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Lex { kind, lexeme, .. } => format!("{} '{}'", kind, lexeme.escape_debug()),
            Self::Parse { message, .. } => message.clone(),
            Self::Io { path, source } => format!("failed to read '{}': {}", path.display(), source),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Lex { location, .. } | Self::Parse { location, .. } => Some(location),
            Self::Io { .. } => None,
        }
    }
}
