//! Parse error types for the PSL front end.
//!
//! Parsing is fail-fast: the first error aborts the pass, so a parse
//! produces at most one [`ParseError`]. The message string is surfaced to
//! callers verbatim.

use crate::span::Span;
use thiserror::Error;

/// A parse error with location and diagnostic information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct ParseError {
    /// The category of error that occurred.
    pub kind: ParseErrorKind,
    /// The location in source where the error occurred.
    pub span: Span,
    /// The fixed diagnostic message for this failure.
    pub message: String,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Format the error with source context for display.
    pub fn display_with_source(&self, source: &str) -> String {
        let mut output = String::new();

        let line = self.span.line;
        let column = self.span.col;

        output.push_str(&format!("Error at {}:{}: {}\n", line, column, self.message));

        if let Some(line_text) = Self::get_line(source, line) {
            output.push_str("  |\n");
            output.push_str(&format!("{:>3} | {}\n", line, line_text));

            let indent = " ".repeat(column.saturating_sub(1) as usize);
            let pointer = if self.span.len <= 1 {
                "^".to_string()
            } else {
                "^".to_string() + &"~".repeat((self.span.len - 1) as usize)
            };
            output.push_str(&format!("  | {}{}\n", indent, pointer));
        }

        output
    }

    /// Get the text of a specific line (1-indexed).
    fn get_line(source: &str, line_num: u32) -> Option<String> {
        source
            .lines()
            .nth(line_num.saturating_sub(1) as usize)
            .map(|s| s.to_string())
    }
}

/// The category of parse error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// The input does not start like a function declaration.
    #[error("invalid declaration")]
    InvalidDeclaration,
    /// Unexpected token in this context.
    #[error("unexpected token")]
    UnexpectedToken,
    /// Expected an identifier (function or parameter name).
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Expected a type keyword.
    #[error("expected type")]
    ExpectedType,
    /// Expected a block (statements surrounded by braces).
    #[error("expected block")]
    ExpectedBlock,
    /// Missing semicolon after a statement.
    #[error("missing semicolon")]
    MissingSemicolon,
    /// Expected an expression.
    #[error("expected expression")]
    ExpectedExpression,
    /// Mismatched delimiters (parentheses).
    #[error("mismatched delimiter")]
    MismatchedDelimiter,
    /// The lexer rejected the input before parsing started.
    #[error("lexical error")]
    Lexical,
}
