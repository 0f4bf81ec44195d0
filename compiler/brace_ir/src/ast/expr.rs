//! Expression nodes.

use std::mem;

use super::operators::{BinaryOp, LogicalOp, UnaryOp};

/// Expression node.
///
/// Each node owns its children; trees are never shared or mutated after
/// parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// Integer literal: `42`
    Integer(i64),
    /// String literal with escapes processed: `"hi"`
    String(String),
    /// Variable or function reference: `x`
    Identifier(String),
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `left op right`, both sides always evaluated
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `left && right` / `left || right`, right side evaluated on demand
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// `(expr)`
    Grouping(Box<Expr>),
}

impl Expr {
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Self {
        Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }
}

impl Expr {
    /// Move boxed and listed children into `out`, leaving leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Integer(_) | Expr::String(_) | Expr::Identifier(_) => {}
            Expr::Unary { operand: inner, .. } | Expr::Grouping(inner) => {
                out.push(mem::replace(&mut **inner, Expr::Integer(0)));
            }
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                out.push(mem::replace(&mut **left, Expr::Integer(0)));
                out.push(mem::replace(&mut **right, Expr::Integer(0)));
            }
            Expr::Call { callee, args } => {
                out.push(mem::replace(&mut **callee, Expr::Integer(0)));
                out.append(args);
            }
        }
    }
}

// Drop glue for nested boxes recurses once per level; a long `!!!!x` chain
// would exhaust the native stack, so children are flattened onto a worklist.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
