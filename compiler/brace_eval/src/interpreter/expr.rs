//! Expression evaluation.

use brace_ir::{Expr, LogicalOp};
use brace_stack::ensure_sufficient_stack;

use super::Evaluator;
use crate::errors::{undefined_variable, EvalResult};
use crate::{evaluate_binary, evaluate_unary, Object};

impl Evaluator {
    /// Evaluate an expression and remember its value as the last result.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Object> {
        let value = ensure_sufficient_stack(|| self.eval_expr_inner(expr))?;
        self.last.clone_from(&value);
        Ok(value)
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult<Object> {
        match expr {
            Expr::Integer(n) => Ok(Object::Integer(*n)),
            Expr::String(s) => Ok(Object::String(s.clone())),
            Expr::Identifier(name) => self
                .state
                .get(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            Expr::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right)
            }
            Expr::Logical { op, left, right } => self.eval_logical(*op, left, right),
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Grouping(inner) => self.eval_expr(inner),
        }
    }

    /// `&&` and `||`: the right side runs only when it decides the result.
    fn eval_logical(&mut self, op: LogicalOp, left: &Expr, right: &Expr) -> EvalResult<Object> {
        let left = self.eval_condition(left)?;
        let value = match (op, left) {
            (LogicalOp::And, false) => false,
            (LogicalOp::Or, true) => true,
            (LogicalOp::And | LogicalOp::Or, _) => self.eval_condition(right)?,
        };
        Ok(Object::bool(value))
    }
}
