//! Parse error types.

use std::fmt;

use brace_ir::{Position, Token};
use brace_lexer::LexError;

/// Any failure while turning source text into a [`Program`](brace_ir::Program).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// The parser could not match the grammar at a token.
///
/// `token` is `None` when the input ended early; `position` then points
/// just past the last token.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub struct SyntaxError {
    pub message: String,
    pub token: Option<Token>,
    pub position: Position,
}

impl SyntaxError {
    /// Error at an offending token.
    pub fn at(message: impl Into<String>, token: &Token) -> Self {
        SyntaxError {
            message: message.into(),
            token: Some(token.clone()),
            position: token.position,
        }
    }

    /// Error at end of input.
    pub fn at_end(message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            message: message.into(),
            token: None,
            position,
        }
    }

    /// Lexeme of the offending token, if any.
    pub fn lexeme(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.lexeme.as_str())
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(
                f,
                "Syntax error: {}: \"{}\": {}.",
                self.position, token.lexeme, self.message
            ),
            None => write!(
                f,
                "Syntax error: {}: end of input: {}.",
                self.position, self.message
            ),
        }
    }
}
