//! Conditionals and loops.
//!
//! Loops are where `Break` and `Continue` stop; `Return` passes through.

use brace_ir::{Expr, Stmt};

use super::{Completion, Evaluator};
use crate::errors::EvalResult;

/// What a loop does after its body finishes.
enum LoopStep {
    Next,
    Exit(Completion),
}

impl From<Completion> for LoopStep {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Normal | Completion::Continue => LoopStep::Next,
            Completion::Break => LoopStep::Exit(Completion::Normal),
            ret @ Completion::Return(_) => LoopStep::Exit(ret),
        }
    }
}

impl Evaluator {
    /// Evaluate a condition to a boolean.
    pub(super) fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        self.eval_expr(condition)?.is_truthy()
    }

    pub(super) fn exec_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> EvalResult<Completion> {
        if self.eval_condition(condition)? {
            self.exec_stmt(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.exec_stmt(else_branch)
        } else {
            Ok(Completion::Normal)
        }
    }

    pub(super) fn exec_while(&mut self, condition: &Expr, body: &Stmt) -> EvalResult<Completion> {
        while self.eval_condition(condition)? {
            if let LoopStep::Exit(completion) = LoopStep::from(self.exec_stmt(body)?) {
                return Ok(completion);
            }
        }
        Ok(Completion::Normal)
    }

    /// `for (init; condition; step) body`.
    ///
    /// The initializer, when present, runs once in its own scope that
    /// lasts for the whole loop. A missing condition is always true.
    pub(super) fn exec_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        step: Option<&Stmt>,
        body: &Stmt,
    ) -> EvalResult<Completion> {
        match init {
            Some(init) => self.with_scope(|scoped| {
                scoped.exec_stmt(init)?;
                scoped.run_for_loop(condition, step, body)
            }),
            None => self.run_for_loop(condition, step, body),
        }
    }

    fn run_for_loop(
        &mut self,
        condition: Option<&Expr>,
        step: Option<&Stmt>,
        body: &Stmt,
    ) -> EvalResult<Completion> {
        loop {
            if let Some(condition) = condition {
                if !self.eval_condition(condition)? {
                    return Ok(Completion::Normal);
                }
            }
            if let LoopStep::Exit(completion) = LoopStep::from(self.exec_stmt(body)?) {
                return Ok(completion);
            }
            if let Some(step) = step {
                self.exec_stmt(step)?;
            }
        }
    }
}
