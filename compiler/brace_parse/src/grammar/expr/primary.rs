//! Unary, call and primary expressions.

use brace_ir::{Expr, TokenKind, UnaryOp};
use brace_stack::ensure_sufficient_stack;

use super::Grammar;
use crate::SyntaxError;

impl Grammar<'_> {
    /// `unary := ("+" | "-" | "!" | "~") unary | call`
    pub(super) fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(op) = self.cursor.current_kind().and_then(UnaryOp::from_token) {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_call()
    }

    /// `call := primary ("(" args? ")")*`
    fn parse_call(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_primary()?;
        while let Some(open) = self.cursor.current().filter(|t| t.is(TokenKind::LParen)) {
            self.cursor.advance();
            let args = self.parse_args()?;
            if !self.cursor.eat(TokenKind::RParen) {
                return Err(self.unmatched_paren(open));
            }
            expr = Expr::call(expr, args);
        }
        Ok(expr)
    }

    /// Comma-separated arguments up to (not including) the closing `)`.
    fn parse_args(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();
        if self.cursor.check(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                return Ok(args);
            }
        }
    }

    /// `primary := INTEGER | STRING | IDENT | "(" expr ")"`
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let Some(token) = self.cursor.current() else {
            return Err(self.cursor.error("expected expression"));
        };

        match token.kind {
            TokenKind::Integer => {
                self.cursor.advance();
                token
                    .integer()
                    .map(Expr::Integer)
                    .ok_or_else(|| SyntaxError::at("malformed integer literal", token))
            }
            TokenKind::String => {
                self.cursor.advance();
                token
                    .string()
                    .map(|s| Expr::String(s.to_string()))
                    .ok_or_else(|| SyntaxError::at("malformed string literal", token))
            }
            TokenKind::Ident => {
                self.cursor.advance();
                Ok(Expr::ident(token.lexeme.as_str()))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                if !self.cursor.eat(TokenKind::RParen) {
                    return Err(self.unmatched_paren(token));
                }
                Ok(Expr::grouping(inner))
            }
            _ => Err(self.cursor.error("expected expression")),
        }
    }

    /// A `(` that never got its `)`; reported at the `(`.
    fn unmatched_paren(&self, open: &brace_ir::Token) -> SyntaxError {
        SyntaxError::at("unmatched '('", open)
    }
}
