//! PSL — a small expression language front end.
//!
//! This crate is the public facade over the workspace: it re-exports the
//! lexer, parser, and AST from `psl-parser` and the shared diagnostics
//! types from `psl-core`.
//!
//! ```
//! use psl::{Arena, Parser};
//!
//! let arena = Arena::new();
//! let source = Parser::parse("main entry() { x = 1 + 2; return x; }", &arena)?;
//!
//! println!("{}", psl::printer::dump(&source));
//! # Ok::<(), psl::ParseError>(())
//! ```

pub use psl_core::{ParseError, ParseErrorKind, Span};
pub use psl_parser::arena::{Arena, DEFAULT_CAPACITY};
pub use psl_parser::ast::{
    walk, AssignStmt, BinaryExpr, BinaryOp, Block, CallExpr, Expr, Function, Ident, LiteralExpr,
    NodeRef, Param, Parser, ReturnStmt, Source, Stmt, UnaryExpr, UnaryOp, VariableExpr,
};
pub use psl_parser::ast::{printer, visitor};
pub use psl_parser::lexer::{
    tokenize, Cursor, KeywordKind, KeywordTable, LexError, Lexer, OperatorKind, Token, TokenKind,
};

/// Keyword-table warmup, re-exported for hosts that want deterministic
/// startup cost. Optional; the table is built lazily otherwise.
pub use psl_parser::lexer::keywords::init;
