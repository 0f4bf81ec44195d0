//! Lexer errors.

use std::fmt;

use brace_ir::Position;

/// A lexical error: the first input the lexer could not classify.
///
/// Lexing stops at the first error; no tokens from the failed `feed`
/// survive.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Lexical error: {position}: \"{lexeme}\": {kind}.")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The offending text: a single character for unknown tokens, the
    /// whole literal for out-of-range integers.
    pub lexeme: String,
    pub position: Position,
}

/// What went wrong.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No sub-lexer matched at this character.
    UnknownToken,
    /// Integer literal does not fit in a signed 64-bit integer.
    IntegerOverflow,
}

impl LexError {
    pub fn unknown_token(ch: char, position: Position) -> Self {
        LexError {
            kind: LexErrorKind::UnknownToken,
            lexeme: ch.to_string(),
            position,
        }
    }

    pub fn integer_overflow(lexeme: &str, position: Position) -> Self {
        LexError {
            kind: LexErrorKind::IntegerOverflow,
            lexeme: lexeme.to_string(),
            position,
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

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken => f.write_str("unknown token"),
            Self::IntegerOverflow => f.write_str("integer literal out of range"),
        }
    }
}
