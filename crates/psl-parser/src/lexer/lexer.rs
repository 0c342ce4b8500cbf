//! The PSL lexer.
//!
//! Scans source text into a flat token vector. Scanning is single-pass and
//! stops at the first unrecognized character: the produced stream then ends
//! with an `Error` token instead of `Eof`.

use psl_core::Span;

use super::cursor::{is_ident_continue, is_ident_start, Cursor};
use super::error::LexError;
use super::keywords::KeywordTable;
use super::token::{OperatorKind, Token, TokenKind};

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    table: &'static KeywordTable,
    error: Option<LexError>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `source` using the process-wide keyword table.
    pub fn new(source: &'src str) -> Self {
        Self::with_table(source, KeywordTable::global())
    }

    /// Create a lexer with an explicit keyword table.
    ///
    /// The table is read-only, so lexers over independent inputs can share
    /// it across threads.
    pub fn with_table(source: &'src str, table: &'static KeywordTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            table,
            error: None,
        }
    }

    /// The error recorded by the last scan, if any.
    pub fn error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Scan the whole input.
    ///
    /// The returned stream always terminates: with a single `Eof` token on
    /// success, or with an `Error` token at the first unrecognized character
    /// (check [`error`](Self::error) for the message).
    pub fn lex(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan_token();
            let kind = token.kind;
            tokens.push(token);

            match kind {
                TokenKind::Eof => break,
                TokenKind::Error => {
                    if let Some(err) = &self.error {
                        log::error!("lexing failed: {err}");
                    }
                    break;
                }
                _ => {}
            }
        }

        tokens
    }

    fn scan_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let start = self.cursor.offset();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let Some(c) = self.cursor.advance() else {
            return Token::new(TokenKind::Eof, "", Span::point(line, column));
        };

        if is_ident_start(c) {
            return self.identifier(start, line, column);
        }

        if c.is_ascii_digit() {
            return self.number(start, line, column);
        }

        let kind = match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Operator(OperatorKind::Plus)),
            '-' => Some(TokenKind::Operator(OperatorKind::Minus)),
            '*' => Some(TokenKind::Operator(OperatorKind::Star)),
            '/' => Some(TokenKind::Operator(OperatorKind::Slash)),
            '=' => Some(TokenKind::Assign),
            _ => None,
        };

        match kind {
            Some(kind) => self.make_token(kind, start, line, column),
            None => self.error_token("Unexpected character", start, line, column),
        }
    }

    /// Skip whitespace and `//` comments (to end of line).
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ') | Some('\r') | Some('\t') | Some('\n') => {
                    self.cursor.advance();
                }
                Some('/') if self.cursor.peek_nth(1) == Some('/') => {
                    while self.cursor.check(|c| c != '\n') {
                        self.cursor.advance();
                    }
                }
                _ => return,
            }
        }
    }

    /// Scan an identifier or keyword. The first character is already
    /// consumed.
    fn identifier(&mut self, start: u32, line: u32, column: u32) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);

        let lexeme = self.cursor.slice_from(start);
        let kind = match self.table.find(lexeme) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        self.make_token(kind, start, line, column)
    }

    /// Scan a numeric literal. The first digit is already consumed.
    ///
    /// A fractional part is taken only when the `.` is directly followed by
    /// a digit, so `1.` produces the literal `1` and leaves the `.` behind.
    fn number(&mut self, start: u32, line: u32, column: u32) -> Token<'src> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        self.make_token(TokenKind::Literal, start, line, column)
    }

    fn make_token(&self, kind: TokenKind, start: u32, line: u32, column: u32) -> Token<'src> {
        let lexeme = self.cursor.slice_from(start);
        Token::new(kind, lexeme, Span::new(line, column, lexeme.len() as u32))
    }

    fn error_token(
        &mut self,
        message: &'static str,
        start: u32,
        line: u32,
        column: u32,
    ) -> Token<'src> {
        let token = self.make_token(TokenKind::Error, start, line, column);
        self.error = Some(LexError::new(message, token.span));
        token
    }
}

/// Scan `source` into tokens, or return the first lexing error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.lex();

    match lexer.error {
        Some(err) => Err(err),
        None => Ok(tokens),
    }
}
