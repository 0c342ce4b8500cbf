//! Lexer error type.

use psl_core::Span;
use thiserror::Error;

/// An error produced while scanning source text.
///
/// The lexer stops at the first unrecognized character; the offending input
/// is also visible in the token stream as a trailing `Error` token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at {span}")]
pub struct LexError {
    /// Human-readable description of the failure.
    pub message: &'static str,
    /// Location of the offending input.
    pub span: Span,
}

impl LexError {
    pub fn new(message: &'static str, span: Span) -> Self {
        Self { message, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let err = LexError::new("Unexpected character", Span::new(2, 5, 1));
        assert_eq!(err.to_string(), "Unexpected character at 2:5");
    }
}
