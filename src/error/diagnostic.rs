//! Diagnostic formatting for better error messages
//!
//! Renders a `JlexError` with the offending source line and a caret under
//! the reported column.

use super::{JlexError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: JlexError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: JlexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: JlexError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        if let Some(location) = self.error.location() {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(ref source) = self.source {
                output.push_str(&self.format_source_context(source, location));
            }
        }

        output
    }

    /// Format source code context around the error location
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.split('\n').collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = (location.line + 1).to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding = " ".repeat(line_num_width + 3 + location.column.saturating_sub(1));
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;

    #[test]
    fn test_diagnostic_without_source() {
        let loc = SourceLocation::at(1, 1);
        let err = JlexError::lex_error(LexErrorKind::UnrecognizedCharacter, "#", loc);
        let diag = Diagnostic::new(err);

        let formatted = diag.format();
        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("unrecognized character '#'"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        colored::control::set_override(false);
        let source = "int x = 42;\nint y = #;\nint z = 10;";
        let loc = SourceLocation::at(2, 9);
        let err = JlexError::lex_error(LexErrorKind::UnrecognizedCharacter, "#", loc);
        let diag = Diagnostic::with_source(err, source);

        let formatted = diag.format();
        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("1 int x = 42;"));
        assert!(formatted.contains("2 int y = #;"));
        assert!(formatted.contains("3 int z = 10;"));

        let caret_line = formatted
            .lines()
            .find(|line| line.trim() == "^")
            .unwrap();
        // "  2 " prefix is four columns wide, then eight columns up to '#'
        assert_eq!(caret_line.find('^'), Some(4 + 8));
    }

    #[test]
    fn test_diagnostic_line_out_of_range() {
        let err = JlexError::parse_error("expected ';'", SourceLocation::at(9, 1));
        let diag = Diagnostic::with_source(err, "int x");
        let formatted = diag.to_string();
        assert!(formatted.contains("expected ';'"));
        assert!(!formatted.contains("int x"));
    }
}
