use brace_ir::{BinaryOp, Expr, LogicalOp, UnaryOp};
use pretty_assertions::assert_eq;

use super::parse_expr;

fn int(n: i64) -> Expr {
    Expr::Integer(n)
}

#[test]
fn literals_and_identifiers() {
    assert_eq!(parse_expr("42"), int(42));
    assert_eq!(parse_expr(r#""a\tb""#), Expr::String("a\tb".to_string()));
    assert_eq!(parse_expr("foo_1"), Expr::ident("foo_1"));
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(
        parse_expr("1 + 2 * 3"),
        Expr::binary(
            BinaryOp::Add,
            int(1),
            Expr::binary(BinaryOp::Mul, int(2), int(3))
        )
    );
}

#[test]
fn binary_levels_are_left_associative() {
    assert_eq!(
        parse_expr("10 - 3 - 2"),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Sub, int(10), int(3)),
            int(2)
        )
    );
    assert_eq!(
        parse_expr("8 / 4 % 3"),
        Expr::binary(
            BinaryOp::Mod,
            Expr::binary(BinaryOp::Div, int(8), int(4)),
            int(3)
        )
    );
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(
        parse_expr("(1 + 2) * 3"),
        Expr::binary(
            BinaryOp::Mul,
            Expr::grouping(Expr::binary(BinaryOp::Add, int(1), int(2))),
            int(3)
        )
    );
}

#[test]
fn shift_sits_between_additive_and_relational() {
    // 1 << 2 + 1 < 9  ==  (1 << (2 + 1)) < 9
    assert_eq!(
        parse_expr("1 << 2 + 1 < 9"),
        Expr::binary(
            BinaryOp::Lt,
            Expr::binary(
                BinaryOp::Shl,
                int(1),
                Expr::binary(BinaryOp::Add, int(2), int(1))
            ),
            int(9)
        )
    );
}

#[test]
fn equality_is_looser_than_relational() {
    assert_eq!(
        parse_expr("1 < 2 == 3 >= 4"),
        Expr::binary(
            BinaryOp::Eq,
            Expr::binary(BinaryOp::Lt, int(1), int(2)),
            Expr::binary(BinaryOp::GtEq, int(3), int(4))
        )
    );
}

#[test]
fn bitwise_tower_and_then_logical() {
    // a | b ^ c & d  ==  a | (b ^ (c & d))
    assert_eq!(
        parse_expr("a | b ^ c & d"),
        Expr::binary(
            BinaryOp::BitOr,
            Expr::ident("a"),
            Expr::binary(
                BinaryOp::BitXor,
                Expr::ident("b"),
                Expr::binary(BinaryOp::BitAnd, Expr::ident("c"), Expr::ident("d"))
            )
        )
    );

    // a || b && c | d  ==  a || (b && (c | d))
    assert_eq!(
        parse_expr("a || b && c | d"),
        Expr::logical(
            LogicalOp::Or,
            Expr::ident("a"),
            Expr::logical(
                LogicalOp::And,
                Expr::ident("b"),
                Expr::binary(BinaryOp::BitOr, Expr::ident("c"), Expr::ident("d"))
            )
        )
    );
}

#[test]
fn logical_operators_get_their_own_node() {
    assert!(matches!(
        parse_expr("x && y"),
        Expr::Logical {
            op: LogicalOp::And,
            ..
        }
    ));
    assert!(matches!(
        parse_expr("x & y"),
        Expr::Binary {
            op: BinaryOp::BitAnd,
            ..
        }
    ));
}

#[test]
fn unary_operators_nest() {
    assert_eq!(
        parse_expr("-!~+x"),
        Expr::unary(
            UnaryOp::Neg,
            Expr::unary(
                UnaryOp::Not,
                Expr::unary(UnaryOp::BitNot, Expr::unary(UnaryOp::Plus, Expr::ident("x")))
            )
        )
    );
    assert_eq!(
        parse_expr("-2 * 3"),
        Expr::binary(BinaryOp::Mul, Expr::unary(UnaryOp::Neg, int(2)), int(3))
    );
}

#[test]
fn calls_take_argument_lists() {
    assert_eq!(parse_expr("f()"), Expr::call(Expr::ident("f"), vec![]));
    assert_eq!(
        parse_expr("f(1, x + 1)"),
        Expr::call(
            Expr::ident("f"),
            vec![
                int(1),
                Expr::binary(BinaryOp::Add, Expr::ident("x"), int(1))
            ]
        )
    );
}

#[test]
fn calls_chain_and_bind_tighter_than_unary() {
    assert_eq!(
        parse_expr("-f(1)(2)"),
        Expr::unary(
            UnaryOp::Neg,
            Expr::call(Expr::call(Expr::ident("f"), vec![int(1)]), vec![int(2)])
        )
    );
}

#[test]
fn deeply_nested_grouping_does_not_overflow() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let expr = parse_expr(&source);
    let mut current = &expr;
    let mut seen = 0;
    while let Expr::Grouping(inner) = current {
        current = &**inner;
        seen += 1;
    }
    assert_eq!(seen, depth);
    assert_eq!(*current, int(1));
}
