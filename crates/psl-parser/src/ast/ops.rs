//! Operator kinds and precedence.

use crate::lexer::OperatorKind;
use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator token to its binary operator.
    pub fn from_operator(op: OperatorKind) -> Self {
        match op {
            OperatorKind::Plus => BinaryOp::Add,
            OperatorKind::Minus => BinaryOp::Sub,
            OperatorKind::Star => BinaryOp::Mul,
            OperatorKind::Slash => BinaryOp::Div,
        }
    }

    /// Binding power used by precedence climbing. Higher binds tighter.
    pub fn precedence(self) -> u32 {
        match self {
            BinaryOp::Mul | BinaryOp::Div => 3,
            BinaryOp::Add | BinaryOp::Sub => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators. Only negation exists in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
