//! Property tests: literal arithmetic matches Rust's own evaluation.

use bracec::Interpreter;
use proptest::prelude::*;

/// A literal arithmetic expression and its value, or `None` if evaluating
/// it divides by zero or overflows.
#[derive(Clone, Debug)]
struct Arith {
    source: String,
    value: Option<i64>,
}

fn leaf() -> impl Strategy<Value = Arith> {
    (0i64..1000).prop_map(|n| Arith {
        source: n.to_string(),
        value: Some(n),
    })
}

fn arith() -> impl Strategy<Value = Arith> {
    leaf().prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/', '%']), inner).prop_map(
            |(l, op, r)| {
                let value = match (l.value, r.value) {
                    (Some(a), Some(b)) => match op {
                        '+' => a.checked_add(b),
                        '-' => a.checked_sub(b),
                        '*' => a.checked_mul(b),
                        '/' => a.checked_div(b),
                        _ => a.checked_rem(b),
                    },
                    _ => None,
                };
                Arith {
                    source: format!("({} {op} {})", l.source, r.source),
                    value,
                }
            },
        )
    })
}

proptest! {
    #[test]
    fn literal_arithmetic_matches_rust(expr in arith()) {
        let mut interp = Interpreter::buffered();
        let outcome = interp.feed(&format!("{};", expr.source));
        match expr.value {
            Some(expected) => {
                prop_assert!(outcome.is_ok(), "{} failed: {:?}", expr.source, outcome);
                prop_assert_eq!(interp.result(), Ok(expected));
            }
            None => prop_assert!(outcome.is_err(), "{} should fail", expr.source),
        }
    }

    #[test]
    fn precedence_matches_rust(a in 0i64..100, b in 0i64..100, c in 1i64..100, d in 1i64..100) {
        let mut interp = Interpreter::buffered();
        let source = format!("{a} + {b} * {c} - {a} / {d} % {c};");
        prop_assert!(interp.feed(&source).is_ok());
        prop_assert_eq!(interp.result(), Ok(a + b * c - a / d % c));
    }
}
