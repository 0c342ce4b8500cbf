//! Statement and block nodes.

use psl_core::Span;

use super::expr::Expr;
use super::node::Ident;

/// The statements of a function body. Exhaustive: the language has exactly
/// two statement forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// `return <expr>;`
    Return(ReturnStmt<'ast>),
    /// `<name> = <expr>;`
    Assign(AssignStmt<'ast>),
}

impl Stmt<'_> {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Return(ret) => ret.span,
            Stmt::Assign(assign) => assign.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub value: Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// The assignment target. Targets are always plain variables.
    pub target: Ident<'ast>,
    pub value: Expr<'ast>,
    pub span: Span,
}

/// A `{ ... }` function body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    pub stmts: &'ast [Stmt<'ast>],
    pub span: Span,
}
