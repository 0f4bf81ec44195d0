//! Statement parsing.
//!
//! Dispatch looks at the current token (and for identifiers, the one
//! after it) to pick a production. Simple statements end in `;`; blocks
//! and control forms do not.

use std::rc::Rc;

use brace_ir::{
    AssignOp, Block, Declaration, FunctionDecl, Param, StepOp, Stmt, TokenKind, TypeName,
};
use brace_stack::ensure_sufficient_stack;

use super::Grammar;
use crate::SyntaxError;

impl Grammar<'_> {
    /// Parse one statement.
    ///
    /// Uses `ensure_sufficient_stack` since blocks and control forms nest
    /// statements recursively.
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, SyntaxError> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.error("expected statement"));
        };

        match kind {
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Print => self.parse_print(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                self.cursor.advance();
                self.expect_semicolon("break")?;
                Ok(Stmt::Break)
            }
            TokenKind::Continue => {
                self.cursor.advance();
                self.expect_semicolon("continue")?;
                Ok(Stmt::Continue)
            }
            TokenKind::Else => Err(self.cursor.error("'else' without a matching 'if'")),
            _ => {
                let stmt = self.parse_simple_statement(true)?;
                self.expect_semicolon("statement")?;
                Ok(stmt)
            }
        }
    }

    /// Statements usable as `for` clauses: declaration, assignment,
    /// increment or a bare expression. No trailing `;` is consumed.
    fn parse_simple_statement(&mut self, allow_declaration: bool) -> Result<Stmt, SyntaxError> {
        let Some(kind) = self.cursor.current_kind() else {
            return Err(self.cursor.error("expected statement"));
        };

        if kind.is_type_keyword() {
            if !allow_declaration {
                return Err(self.cursor.error("declaration not allowed here"));
            }
            return Ok(Stmt::Declaration(self.parse_declaration()?));
        }

        if kind == TokenKind::Ident {
            if let Some(next) = self.cursor.peek_next() {
                if next.kind.is_assign_op() {
                    return self.parse_assignment();
                }
                if next.kind.is_step_op() {
                    return self.parse_increment();
                }
            }
        }

        Ok(Stmt::Expression(self.parse_expr()?))
    }

    /// `type IDENT ("=" expr)?`
    fn parse_declaration(&mut self) -> Result<Declaration, SyntaxError> {
        let ty = self.parse_type()?;
        let name = self.cursor.expect_ident("expected variable name")?.to_string();
        let init = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Declaration { ty, name, init })
    }

    /// `IDENT assign_op expr`
    fn parse_assignment(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.cursor.expect_ident("expected assignment target")?.to_string();
        let op = self
            .cursor
            .current_kind()
            .and_then(AssignOp::from_token)
            .ok_or_else(|| self.cursor.error("expected assignment operator"))?;
        self.cursor.advance();
        let value = self.parse_expr()?;
        Ok(Stmt::Assignment { name, op, value })
    }

    /// `IDENT ("++" | "--")`
    fn parse_increment(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.cursor.expect_ident("expected variable name")?.to_string();
        let op = self
            .cursor
            .current_kind()
            .and_then(StepOp::from_token)
            .ok_or_else(|| self.cursor.error("expected '++' or '--'"))?;
        self.cursor.advance();
        Ok(Stmt::Increment { name, op })
    }

    /// `"print" expr? ";"`
    fn parse_print(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor.expect(TokenKind::Print, "expected 'print'")?;
        let expr = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect_semicolon("print")?;
        Ok(Stmt::Print(expr))
    }

    /// `"return" expr? ";"`
    fn parse_return(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor.expect(TokenKind::Return, "expected 'return'")?;
        let expr = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect_semicolon("return")?;
        Ok(Stmt::Return(expr))
    }

    /// `"{" statement* "}"`
    pub(super) fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        let open = self.cursor.expect(TokenKind::LBrace, "expected '{'")?;
        let mut statements = Vec::new();
        loop {
            if self.cursor.eat(TokenKind::RBrace) {
                return Ok(Block::new(statements));
            }
            if self.cursor.is_at_end() {
                return Err(SyntaxError::at("unclosed '{'", open));
            }
            statements.push(self.parse_statement()?);
        }
    }

    /// `"while" "(" expr ")" statement`
    fn parse_while(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor.expect(TokenKind::While, "expected 'while'")?;
        let condition = self.parse_condition("while")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// `"for" "(" simple? ";" expr? ";" simple? ")" statement`
    fn parse_for(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor.expect(TokenKind::For, "expected 'for'")?;
        self.cursor
            .expect(TokenKind::LParen, "expected '(' after 'for'")?;

        let init = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_simple_statement(true)?))
        };
        self.cursor
            .expect(TokenKind::Semicolon, "expected ';' after for initializer")?;

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "expected ';' after for condition")?;

        let step = if self.cursor.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_simple_statement(false)?))
        };
        self.cursor
            .expect(TokenKind::RParen, "expected ')' after for clauses")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::For {
            init,
            condition,
            step,
            body,
        })
    }

    /// `"if" "(" expr ")" statement ("else" statement)?`
    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor.expect(TokenKind::If, "expected 'if'")?;
        let condition = self.parse_condition("if")?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `"function" IDENT "(" params ")" block`
    fn parse_function(&mut self) -> Result<Stmt, SyntaxError> {
        self.cursor
            .expect(TokenKind::Function, "expected 'function'")?;
        let name = self.cursor.expect_ident("expected function name")?.to_string();
        self.cursor
            .expect(TokenKind::LParen, "expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.cursor.eat(TokenKind::RParen) {
            loop {
                let ty = self.parse_type()?;
                let name = self.cursor.expect_ident("expected parameter name")?.to_string();
                params.push(Param { ty, name });
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor
                .expect(TokenKind::RParen, "expected ')' after parameters")?;
        }

        let body = self.parse_block()?;
        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    /// `"(" expr ")"` after `if`/`while`.
    fn parse_condition(&mut self, keyword: &str) -> Result<brace_ir::Expr, SyntaxError> {
        self.cursor
            .expect(TokenKind::LParen, &format!("expected '(' after '{keyword}'"))?;
        let condition = self.parse_expr()?;
        self.cursor
            .expect(TokenKind::RParen, &format!("expected ')' after {keyword} condition"))?;
        Ok(condition)
    }

    fn parse_type(&mut self) -> Result<TypeName, SyntaxError> {
        let ty = self
            .cursor
            .current_kind()
            .and_then(TypeName::from_token)
            .ok_or_else(|| self.cursor.error("expected type name"))?;
        self.cursor.advance();
        Ok(ty)
    }

    fn expect_semicolon(&mut self, after: &str) -> Result<(), SyntaxError> {
        self.cursor
            .expect(TokenKind::Semicolon, &format!("expected ';' after {after}"))
            .map(|_| ())
    }
}
