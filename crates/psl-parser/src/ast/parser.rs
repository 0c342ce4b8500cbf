//! The PSL parser.
//!
//! A single-pass cursor over the token stream, plus the declaration-level
//! grammar (functions and parameter lists). Statement and expression
//! parsing live in `stmt_parser` and `expr_parser`.
//!
//! Parsing is fail-fast: the first error aborts the whole pass. Nodes
//! already built stay in the arena; they are reclaimed when the arena
//! drops.

use psl_core::{ParseError, ParseErrorKind, Span};

use crate::arena::Arena;
use crate::lexer::{tokenize, KeywordKind, Token, TokenKind};

use super::decl::{Function, Param, Source};
use super::node::Ident;

pub struct Parser<'ast> {
    tokens: Vec<Token<'ast>>,
    position: usize,
    pub(super) arena: &'ast Arena,
}

impl<'ast> Parser<'ast> {
    /// Lex and parse `source`, allocating the tree in `arena`.
    ///
    /// A lexing failure surfaces as [`ParseErrorKind::Lexical`].
    pub fn parse(source: &'ast str, arena: &'ast Arena) -> Result<Source<'ast>, ParseError> {
        let tokens = tokenize(source)
            .map_err(|err| ParseError::new(ParseErrorKind::Lexical, err.span, err.message))?;

        Self::from_tokens(tokens, arena).parse_source()
    }

    /// Create a parser over a pre-lexed token stream.
    ///
    /// The stream is expected to end with a terminal token (`Eof` or
    /// `Error`), as produced by [`Lexer::lex`](crate::lexer::Lexer::lex).
    /// An empty stream is treated as a lone `Eof`.
    pub fn from_tokens(tokens: Vec<Token<'ast>>, arena: &'ast Arena) -> Self {
        let mut tokens = tokens;
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, "", Span::point(1, 1)));
        }

        Self {
            tokens,
            position: 0,
            arena,
        }
    }

    /// Parse the token stream into a [`Source`] tree.
    pub fn parse_source(&mut self) -> Result<Source<'ast>, ParseError> {
        log::debug!("parsing {} tokens", self.tokens.len());

        // The stream must open like a function declaration before any
        // declarations are attempted.
        let opens_declaration = matches!(self.peek(0), Some(t) if t.kind.is_keyword())
            && matches!(self.peek(1), Some(t) if t.kind == TokenKind::Identifier)
            && matches!(self.peek(2), Some(t) if t.kind == TokenKind::LeftParen);

        if !opens_declaration {
            return Err(self.error(
                ParseErrorKind::InvalidDeclaration,
                "Invalid function declaration structure",
            ));
        }

        let mut functions = self.arena.vec();

        while !self.is_at_end() {
            let current = self.current();

            match current.kind {
                TokenKind::Keyword(kw) if kw.is_declaration() => {
                    functions.push(self.parse_function(kw)?);
                }
                _ => {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedToken,
                        "Unexpected token in global scope",
                    ));
                }
            }
        }

        let span = match (functions.first(), functions.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::point(1, 1),
        };

        Ok(Source {
            functions: functions.into_bump_slice(),
            span,
        })
    }

    /// Parse one function declaration. The current token is the declaring
    /// keyword (`main`, `f32`, or `f64`).
    fn parse_function(&mut self, keyword: KeywordKind) -> Result<Function<'ast>, ParseError> {
        let start = self.current().span;
        let is_entry_point = keyword == KeywordKind::Main;
        self.advance();

        let name_token = self.current();
        if name_token.kind != TokenKind::Identifier {
            return Err(self.error(ParseErrorKind::ExpectedIdentifier, "Expected function name"));
        }
        let name = Ident::new(name_token.lexeme, name_token.span);
        self.advance();

        // Opening parenthesis; guaranteed for the first declaration by the
        // leading-structure check, consumed without verification otherwise.
        self.advance();

        let mut params = self.arena.vec();

        while self.current().kind != TokenKind::RightParen {
            let exportable = self.current().kind == TokenKind::Keyword(KeywordKind::Export);
            if exportable {
                self.advance();
            }

            if !self.current().kind.is_keyword() {
                return Err(self.error(ParseErrorKind::ExpectedType, "Expected parameter type"));
            }
            self.advance();

            let param_name = self.current();
            if param_name.kind != TokenKind::Identifier {
                return Err(
                    self.error(ParseErrorKind::ExpectedIdentifier, "Expected parameter name")
                );
            }

            params.push(Param {
                name: Ident::new(param_name.lexeme, param_name.span),
                exportable,
                span: param_name.span,
            });
            self.advance();

            if self.current().kind == TokenKind::Comma {
                self.advance();
            }
        }

        self.advance(); // )

        let body = self.parse_body()?;
        let span = start.merge(body.span);

        Ok(Function {
            name,
            params: params.into_bump_slice(),
            body,
            is_entry_point,
            span,
        })
    }

    // Cursor primitives. The final token (`Eof` or `Error`) acts as a guard
    // sentinel: `advance` never moves past it, and only `current` can
    // observe it.

    /// The token at the cursor.
    #[inline]
    pub(super) fn current(&self) -> Token<'ast> {
        self.tokens[self.position]
    }

    /// Whether the cursor sits on the terminal token.
    #[inline]
    pub(super) fn is_at_end(&self) -> bool {
        self.position + 1 >= self.tokens.len()
    }

    /// Move to the next token, saturating at the terminal position.
    #[inline]
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// The token `offset` positions ahead, or `None` if that position is at
    /// or past the terminal token.
    #[inline]
    pub(super) fn peek(&self, offset: usize) -> Option<Token<'ast>> {
        if self.position + offset + 1 >= self.tokens.len() {
            None
        } else {
            Some(self.tokens[self.position + offset])
        }
    }

    /// Build an error at the current token.
    pub(super) fn error(&self, kind: ParseErrorKind, message: &str) -> ParseError {
        let err = ParseError::new(kind, self.current().span, message);
        log::error!("parsing failed: {err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse<'ast>(source: &'ast str, arena: &'ast Arena) -> Result<Source<'ast>, ParseError> {
        Parser::parse(source, arena)
    }

    #[test]
    fn cursor_stops_at_terminal() {
        let arena = Arena::new();
        let tokens = Lexer::new("x").lex();
        let mut parser = Parser::from_tokens(tokens, &arena);

        assert!(!parser.is_at_end());
        assert_eq!(parser.current().kind, TokenKind::Identifier);

        parser.advance();
        assert!(parser.is_at_end());
        assert_eq!(parser.current().kind, TokenKind::Eof);

        // Saturates; never walks past the sentinel.
        parser.advance();
        assert!(parser.is_at_end());
        assert_eq!(parser.current().kind, TokenKind::Eof);
    }

    #[test]
    fn peek_never_reaches_terminal() {
        let arena = Arena::new();
        let tokens = Lexer::new("a b").lex(); // a, b, Eof
        let parser = Parser::from_tokens(tokens, &arena);

        assert_eq!(parser.peek(0).unwrap().lexeme, "a");
        assert_eq!(parser.peek(1).unwrap().lexeme, "b");
        assert!(parser.peek(2).is_none()); // the Eof slot
        assert!(parser.peek(100).is_none());
    }

    #[test]
    fn empty_token_stream_is_terminal() {
        let arena = Arena::new();
        let parser = Parser::from_tokens(Vec::new(), &arena);
        assert!(parser.is_at_end());
        assert_eq!(parser.current().kind, TokenKind::Eof);
    }

    #[test]
    fn parses_minimal_function() {
        let arena = Arena::new();
        let source = parse("main entry() {}", &arena).unwrap();

        assert_eq!(source.functions.len(), 1);
        let func = &source.functions[0];
        assert_eq!(func.name.name, "entry");
        assert!(func.is_entry_point);
        assert!(func.params.is_empty());
        assert!(func.body.stmts.is_empty());
        assert_eq!(source.entry_point().unwrap().name.name, "entry");
    }

    #[test]
    fn parses_multiple_functions() {
        let arena = Arena::new();
        let source = parse("f32 helper() {} main entry() {}", &arena).unwrap();

        assert_eq!(source.functions.len(), 2);
        assert!(!source.functions[0].is_entry_point);
        assert!(source.functions[1].is_entry_point);
    }

    #[test]
    fn parses_parameters() {
        let arena = Arena::new();
        let source = parse("f32 shade(f32 x, export f32 color) {}", &arena).unwrap();

        let params = source.functions[0].params;
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name.name, "x");
        assert!(!params[0].exportable);
        assert_eq!(params[1].name.name, "color");
        assert!(params[1].exportable);
    }

    #[test]
    fn rejects_bad_leading_structure() {
        let arena = Arena::new();

        for source in ["", "x = 1;", "main () {}", "main entry {}"] {
            let err = parse(source, &arena).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::InvalidDeclaration, "{source:?}");
            assert_eq!(err.message, "Invalid function declaration structure");
        }
    }

    #[test]
    fn rejects_non_declaration_at_global_scope() {
        let arena = Arena::new();
        let err = parse("main entry() {} x", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert_eq!(err.message, "Unexpected token in global scope");
    }

    #[test]
    fn rejects_missing_function_name() {
        let arena = Arena::new();
        // Second declaration is malformed; the first passes the leading
        // structure check.
        let err = parse("main entry() {} f32 () {}", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
        assert_eq!(err.message, "Expected function name");
    }

    #[test]
    fn rejects_missing_parameter_type() {
        let arena = Arena::new();
        let err = parse("main entry(x) {}", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedType);
        assert_eq!(err.message, "Expected parameter type");
    }

    #[test]
    fn rejects_missing_parameter_name() {
        let arena = Arena::new();
        let err = parse("main entry(f32) {}", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier);
        assert_eq!(err.message, "Expected parameter name");
    }

    #[test]
    fn lex_failure_surfaces_as_parse_error() {
        let arena = Arena::new();
        let err = parse("main entry() { x = @; }", &arena).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lexical);
        assert_eq!(err.message, "Unexpected character");
    }
}
