//! The tree-walking evaluator.
//!
//! Statements return a [`Completion`] instead of unwinding: loops consume
//! `Break`/`Continue`, calls consume `Return`, and blocks pass everything
//! through after popping their scope. Whatever reaches the top of a
//! program or a function body unconsumed becomes a logical error.
//!
//! - `stmt.rs`: statement dispatch, declarations, assignment, print
//! - `control.rs`: `if`, `while`, `for`
//! - `expr.rs`: expression dispatch
//! - `call.rs`: function calls
//! - `scope_guard.rs`: scope push/pop that survives early returns

mod call;
mod control;
mod expr;
mod scope_guard;
mod stmt;

pub use scope_guard::ScopedEvaluator;

use brace_ir::Program;
use tracing::debug;

use crate::errors::{
    break_outside_loop, continue_outside_loop, return_outside_function, EvalResult,
};
use crate::{stdout_handler, Object, SharedPrintHandler, State};

/// How a statement finished.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Fell off the end; continue with the next statement.
    Normal,
    /// `return` with its optional value, bound for the nearest call.
    Return(Option<Object>),
    /// `break`, bound for the nearest loop.
    Break,
    /// `continue`, bound for the nearest loop.
    Continue,
}

impl Completion {
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Completion::Normal)
    }
}

/// Executes programs against a persistent root scope.
pub struct Evaluator {
    state: State,
    /// Value of the most recently evaluated expression.
    last: Object,
    print_handler: SharedPrintHandler,
}

impl Evaluator {
    /// Evaluator printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Evaluator {
            state: State::new(),
            last: Object::Void,
            print_handler,
        }
    }

    /// Run every top-level statement in order.
    ///
    /// Statements that ran before a failing one keep their effects.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.len(), "evaluating program");
        for stmt in &program.statements {
            match self.exec_stmt(stmt)? {
                Completion::Normal => {}
                Completion::Return(_) => return Err(return_outside_function()),
                Completion::Break => return Err(break_outside_loop()),
                Completion::Continue => return Err(continue_outside_loop()),
            }
        }
        Ok(())
    }

    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The most recently evaluated expression value.
    #[inline]
    pub fn value(&self) -> &Object {
        &self.last
    }

    /// The most recently evaluated expression value as an integer.
    pub fn result(&self) -> EvalResult<i64> {
        self.last.as_integer()
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Forget all bindings and the last value.
    pub fn clear(&mut self) {
        self.state.clear();
        self.last = Object::Void;
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
