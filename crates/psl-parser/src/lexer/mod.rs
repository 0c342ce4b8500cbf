//! Lexer for PSL source code.
//!
//! Converts source text into a token stream for the parser.

pub mod cursor;
pub mod error;
pub mod keywords;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use keywords::{KeywordKind, KeywordTable};
pub use lexer::{tokenize, Lexer};
pub use token::{OperatorKind, Token, TokenKind};
