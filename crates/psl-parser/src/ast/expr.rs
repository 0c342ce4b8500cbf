//! Expression nodes.
//!
//! Expressions form a closed sum type. Leaf variants are stored inline;
//! compound variants hold arena references so an `Expr` stays `Copy` and
//! small enough to pass by value.

use psl_core::Span;

use super::node::Ident;
use super::ops::{BinaryOp, UnaryOp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Numeric literal: `1`, `1.5`
    Literal(LiteralExpr),
    /// Variable reference: `x`
    Variable(VariableExpr<'ast>),
    /// Binary operation: `a + b`
    Binary(&'ast BinaryExpr<'ast>),
    /// Unary operation: `-a`
    Unary(&'ast UnaryExpr<'ast>),
    /// Function call: `f(a, b)`
    Call(&'ast CallExpr<'ast>),
}

impl Expr<'_> {
    /// Source location of the whole expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(lit) => lit.span,
            Expr::Variable(var) => var.name.span,
            Expr::Binary(bin) => bin.span,
            Expr::Unary(un) => un.span,
            Expr::Call(call) => call.span,
        }
    }
}

/// A numeric literal. Values are single precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr {
    pub value: f32,
    pub span: Span,
}

/// A reference to a variable by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableExpr<'ast> {
    pub name: Ident<'ast>,
}

/// A binary operation with its two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub op: BinaryOp,
    pub left: Expr<'ast>,
    pub right: Expr<'ast>,
    pub span: Span,
}

/// A unary operation applied to one operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: Expr<'ast>,
    pub span: Span,
}

/// A call to a named function with its argument list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub name: Ident<'ast>,
    pub args: &'ast [Expr<'ast>],
    pub span: Span,
}
