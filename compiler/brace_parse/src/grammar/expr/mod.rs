//! Expression parsing.
//!
//! Binary levels share one loop, [`Grammar::parse_binary_level`]; each
//! level only names its operator table and the next-tighter level.
//! Precedence, loosest first:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | logical or | `\|\|` |
//! | logical and | `&&` |
//! | bitwise or | `\|` |
//! | bitwise xor | `^` |
//! | bitwise and | `&` |
//! | equality | `==` `!=` |
//! | relational | `<` `<=` `>` `>=` |
//! | shift | `<<` `>>` |
//! | additive | `+` `-` |
//! | multiplicative | `*` `/` `%` |
//!
//! All binary levels are left-associative. Unary, call and primary forms
//! live in `primary.rs`.

mod operators;
mod primary;

use brace_ir::{Expr, TokenKind};
use brace_stack::ensure_sufficient_stack;

use super::Grammar;
use crate::SyntaxError;
use operators::{
    infix_op, InfixOp, ADDITIVE, BIT_AND, BIT_OR, BIT_XOR, EQUALITY, LOGICAL_AND, LOGICAL_OR,
    MULTIPLICATIVE, RELATIONAL, SHIFT,
};

type LevelFn<'a> = fn(&mut Grammar<'a>) -> Result<Expr, SyntaxError>;

impl<'a> Grammar<'a> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_logical_or())
    }

    fn parse_logical_or(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(LOGICAL_OR, Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(LOGICAL_AND, Self::parse_bit_or)
    }

    fn parse_bit_or(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(BIT_OR, Self::parse_bit_xor)
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(BIT_XOR, Self::parse_bit_and)
    }

    fn parse_bit_and(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(BIT_AND, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(EQUALITY, Self::parse_relational)
    }

    fn parse_relational(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(RELATIONAL, Self::parse_shift)
    }

    fn parse_shift(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(SHIFT, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_binary_level(MULTIPLICATIVE, Self::parse_unary)
    }

    /// Left-associative loop over one precedence level.
    fn parse_binary_level(
        &mut self,
        ops: &[TokenKind],
        next: LevelFn<'a>,
    ) -> Result<Expr, SyntaxError> {
        let mut left = next(self)?;

        while let Some(kind) = self.cursor.current_kind() {
            if !ops.contains(&kind) {
                break;
            }
            let Some(op) = infix_op(kind) else {
                break;
            };
            self.cursor.advance();
            let right = next(self)?;
            left = match op {
                InfixOp::Binary(op) => Expr::binary(op, left, right),
                InfixOp::Logical(op) => Expr::logical(op, left, right),
            };
        }

        Ok(left)
    }
}
