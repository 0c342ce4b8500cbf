//! Core types shared across the PSL front end.
//!
//! This crate holds the leaf types the lexer and parser build on:
//! - [`Span`] — source locations for tokens, nodes, and diagnostics
//! - [`ParseError`] / [`ParseErrorKind`] — the fail-fast parse error model

pub mod error;
pub mod span;

pub use error::{ParseError, ParseErrorKind};
pub use span::Span;
