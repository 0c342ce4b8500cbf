//! Expression parsing with precedence climbing.
//!
//! `parse_binary(min_prec)` folds the left side in a loop, so a chain like
//! `1 + 2 + 3 + ...` nests at most one recursion level per precedence tier
//! regardless of its length. Only parenthesized and unary sub-expressions
//! recurse with the source.

use psl_core::{ParseError, ParseErrorKind};

use crate::lexer::{OperatorKind, TokenKind};

use super::expr::{BinaryExpr, CallExpr, Expr, LiteralExpr, UnaryExpr, VariableExpr};
use super::node::Ident;
use super::ops::{BinaryOp, UnaryOp};
use super::parser::Parser;

impl<'ast> Parser<'ast> {
    pub(super) fn parse_expression(&mut self) -> Result<Expr<'ast>, ParseError> {
        self.parse_binary(0)
    }

    fn parse_binary(&mut self, min_prec: u32) -> Result<Expr<'ast>, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let TokenKind::Operator(op) = self.current().kind else {
                break;
            };

            let op = BinaryOp::from_operator(op);
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }

            self.advance(); // operator

            // One tier up on the right side gives left associativity.
            let right = self.parse_binary(prec + 1)?;

            let node = self.arena.alloc(BinaryExpr {
                op,
                left,
                right,
                span: left.span().merge(right.span()),
            });
            left = Expr::Binary(node);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr<'ast>, ParseError> {
        let current = self.current();

        match current.kind {
            // Leading minus negates the primary that follows.
            TokenKind::Operator(OperatorKind::Minus) => {
                self.advance();

                let operand = self.parse_primary()?;
                let node = self.arena.alloc(UnaryExpr {
                    op: UnaryOp::Neg,
                    operand,
                    span: current.span.merge(operand.span()),
                });
                Ok(Expr::Unary(node))
            }
            // Grouping contributes no node of its own.
            TokenKind::LeftParen => {
                self.advance();

                let expr = self.parse_expression()?;

                if self.current().kind != TokenKind::RightParen {
                    return Err(self.error(
                        ParseErrorKind::MismatchedDelimiter,
                        "Expected closing parenthesis",
                    ));
                }
                self.advance();

                Ok(expr)
            }
            TokenKind::Identifier if self.is_call_start() => self.parse_call(),
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Variable(VariableExpr {
                    name: Ident::new(current.lexeme, current.span),
                }))
            }
            TokenKind::Literal => {
                self.advance();
                // The lexer only emits digit runs with an optional
                // fraction, which always parse; mirror strtof on the
                // impossible path.
                let value = current.lexeme.parse::<f32>().unwrap_or(0.0);
                Ok(Expr::Literal(LiteralExpr {
                    value,
                    span: current.span,
                }))
            }
            _ => Err(self.error(
                ParseErrorKind::ExpectedExpression,
                "Unexpected token in expression",
            )),
        }
    }

    fn is_call_start(&self) -> bool {
        matches!(self.peek(1), Some(t) if t.kind == TokenKind::LeftParen)
    }

    fn parse_call(&mut self) -> Result<Expr<'ast>, ParseError> {
        let name_token = self.current();
        self.advance(); // name
        self.advance(); // (

        let mut args = self.arena.vec();

        while self.current().kind != TokenKind::RightParen {
            args.push(self.parse_expression()?);

            if self.current().kind == TokenKind::Comma {
                self.advance();
            }
        }

        let close = self.current();
        self.advance(); // )

        let node = self.arena.alloc(CallExpr {
            name: Ident::new(name_token.lexeme, name_token.span),
            args: args.into_bump_slice(),
            span: name_token.span.merge(close.span),
        });

        Ok(Expr::Call(node))
    }
}

#[cfg(test)]
mod tests {
    use super::super::decl::Source;
    use super::super::stmt::Stmt;
    use super::*;
    use crate::arena::Arena;

    fn parse_expr<'ast>(expr_src: &str, arena: &'ast Arena) -> Expr<'ast> {
        let source = format!("main entry() {{ x = {expr_src}; }}");
        let source: &'ast str = arena.alloc_str(&source);
        let tree = Parser::parse(source, arena).unwrap();
        let Stmt::Assign(assign) = &tree.functions[0].body.stmts[0] else {
            panic!("expected assignment");
        };
        assign.value
    }

    fn parse_expr_err(expr_src: &str) -> ParseError {
        let arena = Arena::new();
        let source = format!("main entry() {{ x = {expr_src}; }}");
        Parser::parse(&source, &arena).unwrap_err()
    }

    #[test]
    fn literal_values() {
        let arena = Arena::new();
        assert!(matches!(parse_expr("12", &arena), Expr::Literal(l) if l.value == 12.0));
        assert!(matches!(parse_expr("1.5", &arena), Expr::Literal(l) if l.value == 1.5));
    }

    #[test]
    fn multiplication_binds_tighter() {
        // 1 + 2 * 3 => Add(1, Mul(2, 3))
        let arena = Arena::new();
        let Expr::Binary(add) = parse_expr("1 + 2 * 3", &arena) else {
            panic!("expected binary expression");
        };
        assert_eq!(add.op, BinaryOp::Add);
        assert!(matches!(add.left, Expr::Literal(l) if l.value == 1.0));

        let Expr::Binary(mul) = add.right else {
            panic!("expected multiplication on the right");
        };
        assert_eq!(mul.op, BinaryOp::Mul);
    }

    #[test]
    fn multiplication_binds_tighter_on_the_left() {
        // 1 * 2 + 3 => Add(Mul(1, 2), 3)
        let arena = Arena::new();
        let Expr::Binary(add) = parse_expr("1 * 2 + 3", &arena) else {
            panic!("expected binary expression");
        };
        assert_eq!(add.op, BinaryOp::Add);
        assert!(matches!(add.left, Expr::Binary(mul) if mul.op == BinaryOp::Mul));
        assert!(matches!(add.right, Expr::Literal(l) if l.value == 3.0));
    }

    #[test]
    fn subtraction_is_left_associative() {
        // 1 - 2 - 3 => Sub(Sub(1, 2), 3)
        let arena = Arena::new();
        let Expr::Binary(outer) = parse_expr("1 - 2 - 3", &arena) else {
            panic!("expected binary expression");
        };
        assert_eq!(outer.op, BinaryOp::Sub);
        assert!(matches!(outer.left, Expr::Binary(inner) if inner.op == BinaryOp::Sub));
        assert!(matches!(outer.right, Expr::Literal(l) if l.value == 3.0));
    }

    #[test]
    fn parentheses_override_precedence() {
        // (1 + 2) * 3 => Mul(Add(1, 2), 3); grouping leaves no node.
        let arena = Arena::new();
        let Expr::Binary(mul) = parse_expr("(1 + 2) * 3", &arena) else {
            panic!("expected binary expression");
        };
        assert_eq!(mul.op, BinaryOp::Mul);
        assert!(matches!(mul.left, Expr::Binary(add) if add.op == BinaryOp::Add));
    }

    #[test]
    fn unary_negation() {
        // -x + 1 => Add(Neg(x), 1)
        let arena = Arena::new();
        let Expr::Binary(add) = parse_expr("-x + 1", &arena) else {
            panic!("expected binary expression");
        };
        assert_eq!(add.op, BinaryOp::Add);

        let Expr::Unary(neg) = add.left else {
            panic!("expected negation on the left");
        };
        assert_eq!(neg.op, UnaryOp::Neg);
        assert!(matches!(neg.operand, Expr::Variable(v) if v.name.name == "x"));
    }

    #[test]
    fn double_negation() {
        let arena = Arena::new();
        let Expr::Unary(outer) = parse_expr("--x", &arena) else {
            panic!("expected negation");
        };
        assert!(matches!(outer.operand, Expr::Unary(_)));
    }

    #[test]
    fn call_with_arguments() {
        let arena = Arena::new();
        let Expr::Call(call) = parse_expr("mix(a, b, 0.5)", &arena) else {
            panic!("expected call");
        };
        assert_eq!(call.name.name, "mix");
        assert_eq!(call.args.len(), 3);
        assert!(matches!(call.args[2], Expr::Literal(l) if l.value == 0.5));
    }

    #[test]
    fn call_without_arguments() {
        let arena = Arena::new();
        let Expr::Call(call) = parse_expr("time()", &arena) else {
            panic!("expected call");
        };
        assert!(call.args.is_empty());
    }

    #[test]
    fn calls_nest_inside_expressions() {
        let arena = Arena::new();
        let Expr::Binary(add) = parse_expr("f(1) + g(2, h(3))", &arena) else {
            panic!("expected binary expression");
        };
        assert!(matches!(add.left, Expr::Call(_)));
        let Expr::Call(g) = add.right else {
            panic!("expected call on the right");
        };
        assert_eq!(g.args.len(), 2);
        assert!(matches!(g.args[1], Expr::Call(h) if h.args.len() == 1));
    }

    #[test]
    fn rejects_unexpected_token() {
        let err = parse_expr_err("+");
        assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
        assert_eq!(err.message, "Unexpected token in expression");
    }

    #[test]
    fn rejects_unclosed_parenthesis() {
        let err = parse_expr_err("(1 + 2;");
        assert_eq!(err.kind, ParseErrorKind::MismatchedDelimiter);
        assert_eq!(err.message, "Expected closing parenthesis");
    }

    #[test]
    fn long_chains_fold_flat() {
        // The additive chain folds in the loop; depth stays bounded.
        let arena = Arena::new();
        let chain = vec!["1"; 5_000].join(" + ");
        let expr = parse_expr(&chain, &arena);

        let mut count = 1usize;
        let mut current = expr;
        while let Expr::Binary(bin) = current {
            count += 1;
            current = bin.left;
        }
        assert_eq!(count, 5_000);
    }
}
