//! Statement parsing: function bodies, `return`, and assignment.

use psl_core::{ParseError, ParseErrorKind};

use crate::lexer::{KeywordKind, TokenKind};

use super::node::Ident;
use super::parser::Parser;
use super::stmt::{AssignStmt, Block, ReturnStmt, Stmt};

impl<'ast> Parser<'ast> {
    /// Parse a `{ ... }` function body.
    pub(super) fn parse_body(&mut self) -> Result<Block<'ast>, ParseError> {
        let open = self.current();
        if open.kind != TokenKind::LeftBrace {
            return Err(self.error(
                ParseErrorKind::ExpectedBlock,
                "Expected \"{\" at function body start",
            ));
        }
        self.advance();

        let mut stmts = self.arena.vec();

        while self.current().kind != TokenKind::RightBrace {
            let current = self.current();

            match current.kind {
                TokenKind::Keyword(KeywordKind::Return) => {
                    self.advance();

                    let value = self.parse_expression()?;
                    stmts.push(Stmt::Return(ReturnStmt {
                        value,
                        span: current.span.merge(value.span()),
                    }));
                }
                TokenKind::Identifier => {
                    let target = Ident::new(current.lexeme, current.span);
                    self.advance();
                    // The token after an assignment target is consumed
                    // without checking that it is `=`.
                    self.advance();

                    let value = self.parse_expression()?;
                    stmts.push(Stmt::Assign(AssignStmt {
                        target,
                        value,
                        span: current.span.merge(value.span()),
                    }));
                }
                _ => {}
            }

            if self.current().kind != TokenKind::Semicolon {
                return Err(self.error(
                    ParseErrorKind::MissingSemicolon,
                    "Expected ';' after statement",
                ));
            }
            self.advance();
        }

        let close = self.current();
        self.advance(); // }

        Ok(Block {
            stmts: stmts.into_bump_slice(),
            span: open.span.merge(close.span),
        })
    }
}
