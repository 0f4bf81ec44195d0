//! Errors reported by [`Interpreter::feed`](crate::Interpreter::feed).

use brace_eval::EvalError;
use brace_lexer::LexError;
use brace_parse::{ParseError, SyntaxError};

/// Which pipeline stage failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An unrecognized character or malformed literal.
    Lexical,
    /// Tokens did not match the grammar.
    Syntax,
    /// A runtime semantic failure.
    Logical,
    /// An evaluator invariant broke, or output could not be written.
    Internal,
}

/// Any failure from lexing, parsing or evaluating a source unit.
///
/// Displays as the stage's own message, e.g.
/// `Logical error: division by zero.`
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexical(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lexical(_) => ErrorKind::Lexical,
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Eval(EvalError::Logical(_)) => ErrorKind::Logical,
            Error::Eval(EvalError::Internal(_)) => ErrorKind::Internal,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lexical(e) => Error::Lexical(e),
            ParseError::Syntax(e) => Error::Syntax(e),
        }
    }
}

#[cfg(test)]
mod tests;
