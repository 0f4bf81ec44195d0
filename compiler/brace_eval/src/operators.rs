//! Binary and unary operator implementations.
//!
//! Direct enum dispatch over the closed set of runtime types. Integer
//! arithmetic is checked; every failure is a logical error.

use brace_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, invalid_unary_op, modulo_by_zero,
    shift_out_of_range, EvalResult,
};
use crate::Object;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult<Object> {
    result.map(Object::Integer).ok_or_else(|| integer_overflow(op_name))
}

/// Shift amounts must fit the bit width.
fn shift_amount(amount: i64) -> EvalResult<u32> {
    u32::try_from(amount)
        .ok()
        .filter(|n| *n < i64::BITS)
        .ok_or_else(|| shift_out_of_range(amount))
}

/// Evaluate `left op right`.
pub fn evaluate_binary(op: BinaryOp, left: &Object, right: &Object) -> EvalResult<Object> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_binary(op, *a, *b),
        (Object::String(a), Object::String(b)) => eval_string_binary(op, a, b)
            .ok_or_else(|| invalid_binary_op(op, left.ty(), right.ty())),
        _ => Err(invalid_binary_op(op, left.ty(), right.ty())),
    }
}

fn eval_int_binary(op: BinaryOp, a: i64, b: i64) -> EvalResult<Object> {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            checked_arith(a.checked_div(b), "division")
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            checked_arith(a.checked_rem(b), "remainder")
        }
        BinaryOp::Eq => Ok(Object::bool(a == b)),
        BinaryOp::NotEq => Ok(Object::bool(a != b)),
        BinaryOp::Lt => Ok(Object::bool(a < b)),
        BinaryOp::LtEq => Ok(Object::bool(a <= b)),
        BinaryOp::Gt => Ok(Object::bool(a > b)),
        BinaryOp::GtEq => Ok(Object::bool(a >= b)),
        BinaryOp::BitAnd => Ok(Object::Integer(a & b)),
        BinaryOp::BitOr => Ok(Object::Integer(a | b)),
        BinaryOp::BitXor => Ok(Object::Integer(a ^ b)),
        BinaryOp::Shl => checked_arith(a.checked_shl(shift_amount(b)?), "left shift"),
        BinaryOp::Shr => checked_arith(a.checked_shr(shift_amount(b)?), "right shift"),
    }
}

/// `None` when the operator does not apply to strings.
fn eval_string_binary(op: BinaryOp, a: &str, b: &str) -> Option<Object> {
    Some(match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Object::String(joined)
        }
        BinaryOp::Eq => Object::bool(a == b),
        BinaryOp::NotEq => Object::bool(a != b),
        BinaryOp::Lt => Object::bool(a < b),
        BinaryOp::LtEq => Object::bool(a <= b),
        BinaryOp::Gt => Object::bool(a > b),
        BinaryOp::GtEq => Object::bool(a >= b),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::Shl
        | BinaryOp::Shr => return None,
    })
}

/// Evaluate `op operand`.
pub fn evaluate_unary(op: UnaryOp, operand: &Object) -> EvalResult<Object> {
    let Object::Integer(n) = operand else {
        return Err(invalid_unary_op(op, operand.ty()));
    };
    match op {
        UnaryOp::Plus => Ok(Object::Integer(*n)),
        UnaryOp::Neg => checked_arith(n.checked_neg(), "negation"),
        UnaryOp::Not => Ok(Object::bool(*n == 0)),
        UnaryOp::BitNot => Ok(Object::Integer(!n)),
    }
}
