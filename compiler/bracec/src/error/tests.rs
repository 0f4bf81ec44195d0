use super::*;
use brace_ir::Position;
use pretty_assertions::assert_eq;

#[test]
fn kind_follows_the_failing_stage() {
    let lexical = Error::from(LexError::unknown_token('@', Position::START));
    assert_eq!(lexical.kind(), ErrorKind::Lexical);

    let syntax = Error::from(SyntaxError::at_end("expected ';'", Position::new(0, 3)));
    assert_eq!(syntax.kind(), ErrorKind::Syntax);

    assert_eq!(
        Error::from(EvalError::logical("x")).kind(),
        ErrorKind::Logical
    );
    assert_eq!(
        Error::from(EvalError::internal("x")).kind(),
        ErrorKind::Internal
    );
}

#[test]
fn parse_errors_unwrap_into_their_stage() {
    let err = Error::from(ParseError::Lexical(LexError::unknown_token(
        '$',
        Position::new(2, 4),
    )));
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(
        err.to_string(),
        "Lexical error: line 2, col 4: \"$\": unknown token."
    );
}
