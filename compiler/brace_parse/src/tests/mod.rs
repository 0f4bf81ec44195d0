//! Parser tests.

mod expr;
mod stmt;

use brace_ir::{Expr, Program, Stmt};

use crate::{parse, ParseError, SyntaxError};

fn parse_ok(source: &str) -> Program {
    match parse(source) {
        Ok(program) => program,
        Err(e) => panic!("parse failed for {source:?}: {e}"),
    }
}

fn parse_syntax_err(source: &str) -> SyntaxError {
    match parse(source) {
        Ok(program) => panic!("expected syntax error for {source:?}, got {program:?}"),
        Err(ParseError::Syntax(e)) => e,
        Err(e) => panic!("expected syntax error for {source:?}, got {e}"),
    }
}

/// Parse a single expression statement and return its expression.
fn parse_expr(source: &str) -> Expr {
    let program = parse_ok(&format!("{source};"));
    match program.statements.as_slice() {
        [Stmt::Expression(expr)] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn single_stmt(source: &str) -> Stmt {
    let mut program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected exactly one statement");
    program.statements.remove(0)
}
