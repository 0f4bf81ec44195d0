//! Token types for the Brace lexer.

mod kind;


pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// Typed payload carried by literal tokens.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    Integer(i64),
    /// String contents with escapes already processed.
    String(String),
}

/// A classified, positioned lexeme.
///
/// Created once by the lexer and consumed read-only by the parser.
/// Equality compares `kind` and `lexeme` only: two `1` tokens on different
/// lines are the same token.
#[derive(Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// Position of the first character of the lexeme.
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            position,
        }
    }

    /// Attach a literal payload.
    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Create a token at the start of the source, for tests and generated code.
    pub fn dummy(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::new(kind, lexeme, Position::START)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The integer payload, if this is an integer literal.
    pub fn integer(&self) -> Option<i64> {
        match self.literal {
            Some(Literal::Integer(n)) => Some(n),
            _ => None,
        }
    }

    /// The processed string payload, if this is a string literal.
    pub fn string(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.position)
    }
}
