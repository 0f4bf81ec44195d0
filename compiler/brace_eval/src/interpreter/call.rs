//! Function calls.
//!
//! A call runs its body in a fresh scope whose only bindings are the
//! parameters; the caller's scopes are not visible inside.

use brace_ir::{Expr, FunctionDecl};
use tracing::debug;

use super::{Completion, Evaluator};
use crate::errors::{
    break_outside_loop, continue_outside_loop, not_callable, undefined_function,
    wrong_arg_count, wrong_arg_type, EvalResult,
};
use crate::{Object, ObjectType};

impl Evaluator {
    /// Evaluate `callee(args...)`.
    ///
    /// Arguments are evaluated left to right and all of them are checked
    /// before anything is bound or the body runs.
    pub(super) fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> EvalResult<Object> {
        let decl = match self.eval_expr(callee)? {
            Object::Function(Some(decl)) => decl,
            Object::Function(None) => return Err(undefined_function()),
            other => return Err(not_callable(other.ty())),
        };

        if args.len() != decl.params.len() {
            return Err(wrong_arg_count(&decl.name, decl.params.len(), args.len()));
        }

        let mut values = Vec::with_capacity(args.len());
        for (arg, param) in args.iter().zip(&decl.params) {
            let value = self.eval_expr(arg)?;
            let expected = ObjectType::from(param.ty);
            if value.ty() != expected {
                return Err(wrong_arg_type(&param.name, value.ty(), expected));
            }
            values.push(value);
        }

        self.invoke(&decl, values)
    }

    /// Bind parameters in an isolated scope and run the body.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %decl.name))]
    fn invoke(&mut self, decl: &FunctionDecl, args: Vec<Object>) -> EvalResult<Object> {
        let completion = self.with_isolated_scope(|scoped| {
            for (param, value) in decl.params.iter().zip(args) {
                scoped.state.define(param.name.as_str(), value);
            }
            scoped.exec_block(&decl.body)
        })?;

        let result = match completion {
            Completion::Normal | Completion::Return(None) => Object::Void,
            Completion::Return(Some(value)) => value,
            Completion::Break => return Err(break_outside_loop()),
            Completion::Continue => return Err(continue_outside_loop()),
        };
        debug!(ty = %result.ty(), "call returned");
        Ok(result)
    }
}
