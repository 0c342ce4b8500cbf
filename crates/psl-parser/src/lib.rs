//! Parser front end for PSL, a small expression language for shading-style
//! computations.
//!
//! The pipeline: source text goes through the [`lexer`] to a token stream,
//! and the [`ast::Parser`] builds an arena-allocated tree from it.
//!
//! ```
//! use psl_parser::arena::Arena;
//! use psl_parser::ast::Parser;
//!
//! let arena = Arena::new();
//! let source = Parser::parse("main entry() { return 1 + 2; }", &arena)?;
//! assert_eq!(source.functions.len(), 1);
//! # Ok::<(), psl_core::ParseError>(())
//! ```
//!
//! Everything the parse produces borrows the arena (and the source text);
//! dropping the arena releases the whole tree at once.

pub mod arena;
pub mod ast;
pub mod lexer;

pub use arena::Arena;
pub use ast::{Parser, Source};
pub use lexer::{tokenize, LexError, Lexer, Token, TokenKind};
