//! Token definitions for jlex
//!
//! This module defines the token value handed out by the lexer together with
//! the closed sets of keywords, operators and punctuation it recognizes.

use crate::error::{JlexError, LexErrorKind, SourceLocation};
use std::fmt;

/// Lexeme carried by the end-of-input token
pub const EOF_LEXEME: &str = "EOF";

/// Byte range of source text covered by a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A token produced by the lexer
///
/// The lexeme is an owned copy of the source text, so a token stays valid
/// however far the lexer moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            line,
            column,
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Location of the token's first character
    pub fn location(&self) -> SourceLocation {
        SourceLocation::at(self.line, self.column)
    }

    /// Lift an `Error` token into a reportable error. Returns `None` for
    /// every other kind.
    pub fn to_error(&self) -> Option<JlexError> {
        match self.kind {
            TokenKind::Error(kind) => Some(JlexError::lex_error(kind, self.lexeme.clone(), self.location())),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line,
            self.column,
            self.kind.category(),
            self.lexeme
        )
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword(Keyword),
    Operator(Operator),
    Punctuation(Punctuation),
    EndOfInput,
    Error(LexErrorKind),
}

impl TokenKind {
    /// Coarse category name, ignoring the carried variant
    pub fn category(&self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::String => "String",
            Self::Keyword(_) => "Keyword",
            Self::Operator(_) => "Operator",
            Self::Punctuation(_) => "Punctuation",
            Self::EndOfInput => "EndOfInput",
            Self::Error(_) => "Error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Self::Operator(op) => write!(f, "operator '{}'", op),
            Self::Punctuation(p) => write!(f, "'{}'", p),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Error(kind) => write!(f, "error ({})", kind),
        }
    }
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
}

impl Keyword {
    /// Every keyword, in alphabetical order
    pub const ALL: [Keyword; 50] = [
        Self::Abstract,
        Self::Assert,
        Self::Boolean,
        Self::Break,
        Self::Byte,
        Self::Case,
        Self::Catch,
        Self::Char,
        Self::Class,
        Self::Const,
        Self::Continue,
        Self::Default,
        Self::Do,
        Self::Double,
        Self::Else,
        Self::Enum,
        Self::Extends,
        Self::Final,
        Self::Finally,
        Self::Float,
        Self::For,
        Self::Goto,
        Self::If,
        Self::Implements,
        Self::Import,
        Self::Instanceof,
        Self::Int,
        Self::Interface,
        Self::Long,
        Self::Native,
        Self::New,
        Self::Package,
        Self::Private,
        Self::Protected,
        Self::Public,
        Self::Return,
        Self::Short,
        Self::Static,
        Self::Strictfp,
        Self::Super,
        Self::Switch,
        Self::Synchronized,
        Self::This,
        Self::Throw,
        Self::Throws,
        Self::Transient,
        Self::Try,
        Self::Void,
        Self::Volatile,
        Self::While,
    ];

    /// Get keyword from its exact spelling
    pub fn lookup(s: &str) -> Option<Self> {
        match s {
            "abstract" => Some(Self::Abstract),
            "assert" => Some(Self::Assert),
            "boolean" => Some(Self::Boolean),
            "break" => Some(Self::Break),
            "byte" => Some(Self::Byte),
            "case" => Some(Self::Case),
            "catch" => Some(Self::Catch),
            "char" => Some(Self::Char),
            "class" => Some(Self::Class),
            "const" => Some(Self::Const),
            "continue" => Some(Self::Continue),
            "default" => Some(Self::Default),
            "do" => Some(Self::Do),
            "double" => Some(Self::Double),
            "else" => Some(Self::Else),
            "enum" => Some(Self::Enum),
            "extends" => Some(Self::Extends),
            "final" => Some(Self::Final),
            "finally" => Some(Self::Finally),
            "float" => Some(Self::Float),
            "for" => Some(Self::For),
            "goto" => Some(Self::Goto),
            "if" => Some(Self::If),
            "implements" => Some(Self::Implements),
            "import" => Some(Self::Import),
            "instanceof" => Some(Self::Instanceof),
            "int" => Some(Self::Int),
            "interface" => Some(Self::Interface),
            "long" => Some(Self::Long),
            "native" => Some(Self::Native),
            "new" => Some(Self::New),
            "package" => Some(Self::Package),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            "public" => Some(Self::Public),
            "return" => Some(Self::Return),
            "short" => Some(Self::Short),
            "static" => Some(Self::Static),
            "strictfp" => Some(Self::Strictfp),
            "super" => Some(Self::Super),
            "switch" => Some(Self::Switch),
            "synchronized" => Some(Self::Synchronized),
            "this" => Some(Self::This),
            "throw" => Some(Self::Throw),
            "throws" => Some(Self::Throws),
            "transient" => Some(Self::Transient),
            "try" => Some(Self::Try),
            "void" => Some(Self::Void),
            "volatile" => Some(Self::Volatile),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Assert => "assert",
            Self::Boolean => "boolean",
            Self::Break => "break",
            Self::Byte => "byte",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Char => "char",
            Self::Class => "class",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Do => "do",
            Self::Double => "double",
            Self::Else => "else",
            Self::Enum => "enum",
            Self::Extends => "extends",
            Self::Final => "final",
            Self::Finally => "finally",
            Self::Float => "float",
            Self::For => "for",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Implements => "implements",
            Self::Import => "import",
            Self::Instanceof => "instanceof",
            Self::Int => "int",
            Self::Interface => "interface",
            Self::Long => "long",
            Self::Native => "native",
            Self::New => "new",
            Self::Package => "package",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
            Self::Return => "return",
            Self::Short => "short",
            Self::Static => "static",
            Self::Strictfp => "strictfp",
            Self::Super => "super",
            Self::Switch => "switch",
            Self::Synchronized => "synchronized",
            Self::This => "this",
            Self::Throw => "throw",
            Self::Throws => "throws",
            Self::Transient => "transient",
            Self::Try => "try",
            Self::Void => "void",
            Self::Volatile => "volatile",
            Self::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operators, from one to four characters long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Arithmetic
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    Percent,    // %
    PlusPlus,   // ++
    MinusMinus, // --

    // Comparison
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Logical and bitwise
    Bang,      // !
    Amp,       // &
    Pipe,      // |
    Caret,     // ^
    Tilde,     // ~
    AndAnd,    // &&
    OrOr,      // ||
    Shl,       // <<
    Shr,       // >>
    UShr,      // >>>

    // Conditional
    Question, // ?
    Colon,    // :

    // Assignment
    Assign,        // =
    PlusAssign,    // +=
    MinusAssign,   // -=
    StarAssign,    // *=
    SlashAssign,   // /=
    PercentAssign, // %=
    AmpAssign,     // &=
    PipeAssign,    // |=
    CaretAssign,   // ^=
    ShlAssign,     // <<=
    ShrAssign,     // >>=
    UShrAssign,    // >>>=
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Bang => "!",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Question => "?",
            Self::Colon => ":",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PercentAssign => "%=",
            Self::AmpAssign => "&=",
            Self::PipeAssign => "|=",
            Self::CaretAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::UShrAssign => ">>>=",
        }
    }

    /// Number of source characters the operator spans
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Longest operator spelled by a prefix of `chars`.
    ///
    /// Characters past the end of input are expected as `'\0'`, which never
    /// takes part in an operator, so short inputs fall through to shorter
    /// forms.
    pub fn munch(chars: [char; 4]) -> Option<Self> {
        let op = match chars {
            ['>', '>', '>', '='] => Self::UShrAssign,
            ['>', '>', '>', _] => Self::UShr,
            ['>', '>', '=', _] => Self::ShrAssign,
            ['<', '<', '=', _] => Self::ShlAssign,

            ['>', '>', ..] => Self::Shr,
            ['<', '<', ..] => Self::Shl,
            ['>', '=', ..] => Self::GreaterEqual,
            ['<', '=', ..] => Self::LessEqual,
            ['=', '=', ..] => Self::Equal,
            ['!', '=', ..] => Self::NotEqual,
            ['+', '+', ..] => Self::PlusPlus,
            ['-', '-', ..] => Self::MinusMinus,
            ['+', '=', ..] => Self::PlusAssign,
            ['-', '=', ..] => Self::MinusAssign,
            ['*', '=', ..] => Self::StarAssign,
            ['/', '=', ..] => Self::SlashAssign,
            ['%', '=', ..] => Self::PercentAssign,
            ['&', '=', ..] => Self::AmpAssign,
            ['|', '=', ..] => Self::PipeAssign,
            ['^', '=', ..] => Self::CaretAssign,
            ['&', '&', ..] => Self::AndAnd,
            ['|', '|', ..] => Self::OrOr,

            ['+', ..] => Self::Plus,
            ['-', ..] => Self::Minus,
            ['*', ..] => Self::Star,
            ['/', ..] => Self::Slash,
            ['%', ..] => Self::Percent,
            ['=', ..] => Self::Assign,
            ['<', ..] => Self::Less,
            ['>', ..] => Self::Greater,
            ['!', ..] => Self::Bang,
            ['&', ..] => Self::Amp,
            ['|', ..] => Self::Pipe,
            ['^', ..] => Self::Caret,
            ['~', ..] => Self::Tilde,
            ['?', ..] => Self::Question,
            [':', ..] => Self::Colon,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single-character separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuation {
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Semicolon,    // ;
    Comma,        // ,
    Dot,          // .
    At,           // @
}

impl Punctuation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            '{' => Some(Self::LeftBrace),
            '}' => Some(Self::RightBrace),
            '[' => Some(Self::LeftBracket),
            ']' => Some(Self::RightBracket),
            ';' => Some(Self::Semicolon),
            ',' => Some(Self::Comma),
            '.' => Some(Self::Dot),
            '@' => Some(Self::At),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::LeftBracket => '[',
            Self::RightBracket => ']',
            Self::Semicolon => ';',
            Self::Comma => ',',
            Self::Dot => '.',
            Self::At => '@',
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
