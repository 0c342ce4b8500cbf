//! Token types and definitions for the PSL lexer.

use psl_core::Span;
use std::fmt;

use super::keywords::KeywordKind;

/// A token from the source code.
///
/// Tokens are zero-copy: `lexeme` borrows the original source buffer, so a
/// token must not outlive the source it was scanned from.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub lexeme: &'src str,
    /// Location in source.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {:?})", self.kind, self.lexeme, self.span)
    }
}

/// All possible token types in PSL.
///
/// Keyword and operator tokens carry their discriminating payload directly
/// instead of a side-channel subtype field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of file
    Eof,
    /// Lexer error (unrecognized input)
    Error,
    /// User-defined identifier
    Identifier,
    /// Numeric literal: `12`, `1.5`
    Literal,
    /// Keyword: `f32`, `f64`, `main`, `export`, `return`
    Keyword(KeywordKind),
    /// Arithmetic operator: `+ - * /`
    Operator(OperatorKind),
    /// `=`
    Assign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

impl TokenKind {
    /// Check if this token kind is a keyword (of any kind).
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Check if this token kind is an operator (of any kind).
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    /// Get the string representation of this token kind for error messages.
    pub fn description(self) -> &'static str {
        use TokenKind::*;
        match self {
            Eof => "end of file",
            Error => "error",
            Identifier => "identifier",
            Literal => "literal",
            Keyword(kw) => kw.spelling(),
            Operator(op) => op.symbol(),
            Assign => "'='",
            LeftParen => "'('",
            RightParen => "')'",
            LeftBrace => "'{'",
            RightBrace => "'}'",
            Comma => "','",
            Semicolon => "';'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The arithmetic operator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl OperatorKind {
    /// The operator's source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Star => "*",
            OperatorKind::Slash => "/",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
