//! Evaluation errors and their constructors.
//!
//! Every runtime failure message is built here so the wording stays
//! consistent across the evaluator.

use brace_ir::{BinaryOp, UnaryOp};

use crate::ObjectType;

/// A runtime failure.
///
/// `Logical` covers user-facing semantic errors; `Internal` means the
/// evaluator reached a state the parser should have made impossible, or
/// the output sink failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Logical error: {0}.")]
    Logical(String),
    #[error("Internal error: {0}.")]
    Internal(String),
}

impl EvalError {
    pub fn logical(message: impl Into<String>) -> Self {
        EvalError::Logical(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        EvalError::Internal(message.into())
    }

    /// The message without the `Logical error:` / `Internal error:` prefix.
    pub fn message(&self) -> &str {
        match self {
            EvalError::Logical(m) | EvalError::Internal(m) => m,
        }
    }

    #[inline]
    pub fn is_logical(&self) -> bool {
        matches!(self, EvalError::Logical(_))
    }
}

pub type EvalResult<T> = Result<T, EvalError>;

// Names and bindings

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::logical(format!("undefined identifier '{name}'"))
}

#[cold]
pub fn type_mismatch(name: &str, expected: ObjectType, found: ObjectType) -> EvalError {
    EvalError::logical(format!(
        "cannot assign a value of type {found} to '{name}' of type {expected}"
    ))
}

// Operators

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: ObjectType, right: ObjectType) -> EvalError {
    EvalError::logical(format!(
        "operator '{op}' is not supported between {left} and {right}"
    ))
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: ObjectType) -> EvalError {
    EvalError::logical(format!("operator '{op}' is not supported for {operand}"))
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::logical("division by zero")
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::logical("modulo by zero")
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::logical(format!("integer overflow in {operation}"))
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalError::logical(format!("shift amount {amount} is out of range"))
}

#[cold]
pub fn not_a_condition(ty: ObjectType) -> EvalError {
    EvalError::logical(format!("a value of type {ty} cannot be used as a condition"))
}

#[cold]
pub fn not_an_integer(ty: ObjectType) -> EvalError {
    EvalError::logical(format!("expected a value of type int, found {ty}"))
}

// Calls

#[cold]
pub fn not_callable(ty: ObjectType) -> EvalError {
    EvalError::logical(format!("object of type {ty} is not callable"))
}

#[cold]
pub fn undefined_function() -> EvalError {
    EvalError::logical("call to an undefined function")
}

#[cold]
pub fn wrong_arg_count(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::logical(format!(
        "number of arguments mismatch: '{function}' expects {expected}, got {got}"
    ))
}

#[cold]
pub fn wrong_arg_type(param: &str, found: ObjectType, expected: ObjectType) -> EvalError {
    EvalError::logical(format!(
        "invalid type in function call: {param} is of type {found} but expected type {expected}"
    ))
}

// Abrupt completions

#[cold]
pub fn break_outside_loop() -> EvalError {
    EvalError::logical("break outside loop")
}

#[cold]
pub fn continue_outside_loop() -> EvalError {
    EvalError::logical("continue outside loop")
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::logical("return outside function")
}

// Internal

#[cold]
pub fn output_failed(err: &std::io::Error) -> EvalError {
    EvalError::internal(format!("failed to write output: {err}"))
}

#[cfg(test)]
mod tests;
