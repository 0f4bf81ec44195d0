use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_prefixes_the_error_kind() {
    assert_eq!(
        undefined_variable("x").to_string(),
        "Logical error: undefined identifier 'x'."
    );
    assert_eq!(
        EvalError::internal("unknown operator").to_string(),
        "Internal error: unknown operator."
    );
}

#[test]
fn message_strips_the_prefix() {
    assert_eq!(division_by_zero().message(), "division by zero");
    assert!(division_by_zero().is_logical());
    assert!(!EvalError::internal("x").is_logical());
}

#[test]
fn messages_name_types_and_operators() {
    assert_eq!(
        invalid_binary_op(BinaryOp::Sub, ObjectType::String, ObjectType::Integer).message(),
        "operator '-' is not supported between str and int"
    );
    assert_eq!(
        wrong_arg_type("n", ObjectType::String, ObjectType::Integer).message(),
        "invalid type in function call: n is of type str but expected type int"
    );
    assert_eq!(
        type_mismatch("s", ObjectType::String, ObjectType::Integer).message(),
        "cannot assign a value of type int to 's' of type str"
    );
}
