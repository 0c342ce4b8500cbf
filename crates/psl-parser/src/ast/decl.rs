//! Top-level declarations: the source root, functions, and parameters.

use psl_core::Span;

use super::node::Ident;
use super::stmt::Block;

/// The root of a parsed program: the ordered list of functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Source<'ast> {
    pub functions: &'ast [Function<'ast>],
    pub span: Span,
}

impl<'ast> Source<'ast> {
    /// The entry point, if the program declared one with `main`.
    pub fn entry_point(&self) -> Option<&Function<'ast>> {
        self.functions.iter().find(|f| f.is_entry_point)
    }
}

/// A function declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Function<'ast> {
    pub name: Ident<'ast>,
    pub params: &'ast [Param<'ast>],
    pub body: Block<'ast>,
    /// True for functions declared with the `main` keyword.
    pub is_entry_point: bool,
    pub span: Span,
}

/// A function parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    pub name: Ident<'ast>,
    /// True when the parameter was marked `export`.
    pub exportable: bool,
    pub span: Span,
}
