//! Statement execution.

use std::rc::Rc;

use brace_ir::{AssignOp, Block, Declaration, Expr, StepOp, Stmt};
use brace_stack::ensure_sufficient_stack;

use super::{Completion, Evaluator};
use crate::errors::{output_failed, undefined_variable, EvalResult};
use crate::{evaluate_binary, Object, ObjectType};

impl Evaluator {
    /// Execute one statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Completion> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<Completion> {
        match stmt {
            Stmt::Expression(expr) => {
                self.eval_expr(expr)?;
                Ok(Completion::Normal)
            }
            Stmt::Declaration(decl) => {
                self.exec_declaration(decl)?;
                Ok(Completion::Normal)
            }
            Stmt::Assignment { name, op, value } => {
                self.exec_assignment(name, *op, value)?;
                Ok(Completion::Normal)
            }
            Stmt::Increment { name, op } => {
                self.exec_increment(name, *op)?;
                Ok(Completion::Normal)
            }
            Stmt::Print(expr) => {
                self.exec_print(expr.as_ref())?;
                Ok(Completion::Normal)
            }
            Stmt::Block(block) => self.exec_block(block),
            Stmt::While { condition, body } => self.exec_while(condition, body),
            Stmt::For {
                init,
                condition,
                step,
                body,
            } => self.exec_for(init.as_deref(), condition.as_ref(), step.as_deref(), body),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => self.exec_if(condition, then_branch, else_branch.as_deref()),
            Stmt::Function(decl) => {
                self.state
                    .define(decl.name.as_str(), Object::function(Rc::clone(decl)));
                Ok(Completion::Normal)
            }
            Stmt::Return(expr) => {
                let value = expr.as_ref().map(|e| self.eval_expr(e)).transpose()?;
                Ok(Completion::Return(value))
            }
            Stmt::Break => Ok(Completion::Break),
            Stmt::Continue => Ok(Completion::Continue),
        }
    }

    /// Run statements in order, stopping at the first abrupt completion.
    pub(super) fn exec_statements(&mut self, statements: &[Stmt]) -> EvalResult<Completion> {
        for stmt in statements {
            let completion = self.exec_stmt(stmt)?;
            if !completion.is_normal() {
                return Ok(completion);
            }
        }
        Ok(Completion::Normal)
    }

    /// `{ ... }` in a child scope.
    pub(super) fn exec_block(&mut self, block: &Block) -> EvalResult<Completion> {
        self.with_scope(|scoped| scoped.exec_statements(&block.statements))
    }

    fn exec_declaration(&mut self, decl: &Declaration) -> EvalResult<()> {
        let mut object = Object::default_for(ObjectType::from(decl.ty));
        if let Some(init) = &decl.init {
            let value = self.eval_expr(init)?;
            object.assign(&decl.name, value)?;
        }
        self.state.define(decl.name.as_str(), object);
        Ok(())
    }

    fn exec_assignment(&mut self, name: &str, op: AssignOp, value: &Expr) -> EvalResult<()> {
        if !self.state.contains(name) {
            return Err(undefined_variable(name));
        }
        let value = self.eval_expr(value)?;
        self.update(name, |current| match op.binary_op() {
            None => Ok(value),
            Some(binary) => evaluate_binary(binary, current, &value),
        })
    }

    fn exec_increment(&mut self, name: &str, op: StepOp) -> EvalResult<()> {
        self.update(name, |current| {
            evaluate_binary(op.binary_op(), current, &Object::Integer(1))
        })
    }

    /// Replace the binding of `name` with `f(current)`, type-checked.
    fn update<F>(&mut self, name: &str, f: F) -> EvalResult<()>
    where
        F: FnOnce(&Object) -> EvalResult<Object>,
    {
        let current = self
            .state
            .get_mut(name)
            .ok_or_else(|| undefined_variable(name))?;
        let next = f(current)?;
        current.assign(name, next)
    }

    fn exec_print(&mut self, expr: Option<&Expr>) -> EvalResult<()> {
        let text = match expr {
            Some(expr) => self.eval_expr(expr)?.to_string(),
            None => String::new(),
        };
        self.print_handler
            .println(&text)
            .map_err(|e| output_failed(&e))
    }
}
