//! Grammar productions.
//!
//! `Grammar` is the recursive-descent state for one token sequence; it is
//! created per parse and thrown away afterwards.
//!
//! - `stmt.rs`: statement dispatch and statement forms
//! - `expr/mod.rs`: the binary precedence chain
//! - `expr/operators.rs`: operator tables per precedence level
//! - `expr/primary.rs`: unary, call and primary expressions

mod expr;
mod stmt;

use brace_ir::{Program, Token};

use crate::{Cursor, SyntaxError};

pub(crate) struct Grammar<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Grammar<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Grammar {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program := statement*`
    pub(crate) fn parse_program(mut self) -> Result<Program, SyntaxError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program::new(statements))
    }
}
