//! Recursive descent parser for Brace.
//!
//! [`Parser::feed`] drives the lexer over a source unit and parses the
//! resulting tokens into one [`Program`]. Parsing always finishes before
//! anything is executed, so a syntax error never leaves side effects.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::{ParseError, SyntaxError};

use brace_ir::{Program, Token};
use brace_lexer::Lexer;
use tracing::debug;

use grammar::Grammar;

/// Parser session: owns the lexer and the most recently parsed tree.
///
/// Nothing carries over between `feed` calls; each call starts from a
/// cleared lexer and discards the previous tree.
#[derive(Debug, Default)]
pub struct Parser {
    lexer: Lexer,
    root: Option<Program>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex and parse `source`, replacing the current tree.
    ///
    /// On failure the parser is left cleared.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn feed(&mut self, source: &str) -> Result<&Program, ParseError> {
        self.clear();
        self.lexer.feed(source)?;
        let tokens = self.lexer.take_tokens();
        let program = parse_tokens(&tokens)?;
        Ok(self.root.insert(program))
    }

    /// Parse an already-lexed token sequence, replacing the current tree.
    pub fn feed_tokens(&mut self, tokens: &[Token]) -> Result<&Program, SyntaxError> {
        self.clear();
        let program = parse_tokens(tokens)?;
        Ok(self.root.insert(program))
    }

    /// The tree produced by the last successful `feed`.
    #[inline]
    pub fn ast_root(&self) -> Option<&Program> {
        self.root.as_ref()
    }

    /// Move the tree out of the parser.
    pub fn take_root(&mut self) -> Option<Program> {
        self.root.take()
    }

    /// Discard lexer state and the tree.
    pub fn clear(&mut self) {
        self.lexer.clear();
        self.root = None;
    }
}

/// Parse a complete source string.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = brace_lexer::lex(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Parse an already-lexed token sequence.
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let program = Grammar::new(tokens).parse_program()?;
    debug!(statements = program.len(), "parsed program");
    Ok(program)
}
