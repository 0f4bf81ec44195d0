//! Token cursor for navigating the token stream.
//!
//! Single-token lookahead: the parser can look at the current token, the
//! one after it, and the one it just consumed. Running off the end yields
//! `None` rather than a sentinel EOF token.

use brace_ir::{Position, Token, TokenKind};
use tracing::trace;

use crate::SyntaxError;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Peek one token past the current one.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Check the kind of the token after the current one.
    #[inline]
    pub fn check_next(&self, kind: TokenKind) -> bool {
        self.peek_next().is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        trace!(?token, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, SyntaxError> {
        if self.check(kind) {
            self.pos += 1;
            Ok(&self.tokens[self.pos - 1])
        } else {
            Err(self.error(message))
        }
    }

    /// Consume an identifier and return its name.
    pub fn expect_ident(&mut self, message: &str) -> Result<&'a str, SyntaxError> {
        self.expect(TokenKind::Ident, message)
            .map(|t| t.lexeme.as_str())
    }

    /// Build an error at the current token, or at end of input.
    pub fn error(&self, message: &str) -> SyntaxError {
        match self.current() {
            Some(token) => SyntaxError::at(message, token),
            None => SyntaxError::at_end(message, self.end_position()),
        }
    }

    /// Position just past the last token.
    pub fn end_position(&self) -> Position {
        self.tokens.last().map_or(Position::START, |last| {
            Position::new(
                last.position.line,
                last.position.column + last.lexeme.chars().count(),
            )
        })
    }
}
