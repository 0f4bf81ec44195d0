//! End-to-end programs through the `Interpreter` facade.

use bracec::{ErrorKind, Interpreter, Object};
use pretty_assertions::assert_eq;

fn run(source: &str) -> Interpreter {
    let mut interp = Interpreter::buffered();
    if let Err(e) = interp.feed(source) {
        panic!("program failed: {e}\n{source}");
    }
    interp
}

fn run_err(source: &str) -> (Interpreter, bracec::Error) {
    let mut interp = Interpreter::buffered();
    match interp.feed(source) {
        Ok(()) => panic!("program should have failed:\n{source}"),
        Err(e) => (interp, e),
    }
}

#[test]
fn precedence_example() {
    let interp = run("2 * (333/(44 % 5) + 66666) - 777;");
    assert_eq!(interp.result(), Ok(2 * (333 / (44 % 5) + 66666) - 777));
}

#[test]
fn fizzbuzz() {
    let source = r#"
        for (int i = 1; i <= 15; i++) {
            if (i % 15 == 0) print "FizzBuzz";
            else if (i % 3 == 0) print "Fizz";
            else if (i % 5 == 0) print "Buzz";
            else print i;
        }
    "#;
    let expected = "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n";
    assert_eq!(run(source).output(), expected);
}

#[test]
fn fibonacci_with_recursion() {
    let source = "
        function fib(fnc self, int n) {
            if (n < 2) return n;
            return self(self, n - 1) + self(self, n - 2);
        }
        print fib(fib, 15);
    ";
    assert_eq!(run(source).output(), "610\n");
}

#[test]
fn nested_shadow_disappears_after_block() {
    let interp = run("int x = 1; { int x = 2; { int x = 3; print x; } print x; } print x;");
    assert_eq!(interp.output(), "3\n2\n1\n");
    assert_eq!(interp.state().get("x"), Some(&Object::Integer(1)));
}

#[test]
fn break_and_continue_target_innermost_loop() {
    let source = "
        int total = 0;
        int i = 0;
        while (i < 4) {
            i++;
            for (int j = 0; ; j++) {
                if (j == i) break;
                if (j % 2 == 1) continue;
                total += 1;
            }
        }
        print total;
    ";
    // i=1: j=0 -> 1; i=2: j=0 -> 1; i=3: j=0,2 -> 2; i=4: j=0,2 -> 2
    assert_eq!(run(source).output(), "6\n");
}

#[test]
fn return_from_deep_nesting_restores_caller_scope() {
    let source = "
        int outer = 5;
        function pick(int n) {
            { { while (1) { for (;;) { { return n * 2; } } } } }
        }
        int got = pick(21);
        print got + outer;
    ";
    let interp = run(source);
    assert_eq!(interp.output(), "47\n");
    assert_eq!(interp.state().depth(), 1);
}

#[test]
fn wrong_arguments_do_not_run_the_body() {
    let source = "
        function shout(str s) { print s + \"!\"; }
        shout(1);
    ";
    let (interp, err) = run_err(source);
    assert_eq!(err.kind(), ErrorKind::Logical);
    assert_eq!(
        err.to_string(),
        "Logical error: invalid type in function call: s is of type int but expected type str."
    );
    assert_eq!(interp.output(), "");

    let (interp, err) = run_err("function two(int a, int b) { print a; } two(1, 2, 3);");
    assert_eq!(err.kind(), ErrorKind::Logical);
    assert_eq!(interp.output(), "");
}

#[test]
fn lexical_error_position() {
    let (mut interp, err) = run_err("@");
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(
        err.to_string(),
        "Lexical error: line 0, col 0: \"@\": unknown token."
    );

    interp.clear();
    assert_eq!(interp.feed("print 1;"), Ok(()));
    assert_eq!(interp.output(), "1\n");
}

#[test]
fn lexical_error_on_later_line() {
    let (_, err) = run_err("int x = 1;\nint y = 2 # 3;");
    assert_eq!(
        err.to_string(),
        "Lexical error: line 1, col 10: \"#\": unknown token."
    );
}

#[test]
fn syntax_error_message() {
    let (_, err) = run_err("print (1 + 2;");
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(
        err.to_string(),
        "Syntax error: line 0, col 6: \"(\": unmatched '('."
    );
}

#[test]
fn clear_then_feed_sees_nothing_old() {
    let mut interp = run("int a = 1; function f() { return 2; } print a;");
    interp.clear();
    assert_eq!(interp.output(), "");

    let err = interp.feed("print a;");
    assert_eq!(err.map_err(|e| e.kind()), Err(ErrorKind::Logical));
    let err = interp.feed("f();");
    assert_eq!(err.map_err(|e| e.kind()), Err(ErrorKind::Logical));
    assert_eq!(interp.output(), "");
}

#[test]
fn strings_and_escapes() {
    let interp = run(r#"str s = "tab\there"; print s; print "a" < "b"; print "x" + "y";"#);
    assert_eq!(interp.output(), "tab\there\n1\nxy\n");
}

#[test]
fn abrupt_completion_misuse_is_logical() {
    for source in ["break;", "continue;", "return;", "if (1) { break; }"] {
        let (_, err) = run_err(source);
        assert_eq!(err.kind(), ErrorKind::Logical, "{source}");
    }
}

#[test]
fn writer_handler_receives_lines() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match self.0.lock() {
                Ok(mut bytes) => bytes.extend_from_slice(buf),
                Err(poisoned) => poisoned.into_inner().extend_from_slice(buf),
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let mut interp = Interpreter::with_print_handler(bracec::writer_handler(sink.clone()));
    assert_eq!(interp.feed("print 1; print \"two\";"), Ok(()));
    let bytes = match sink.0.lock() {
        Ok(bytes) => bytes.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    assert_eq!(String::from_utf8_lossy(&bytes), "1\ntwo\n");
}

#[test]
fn long_unary_chain_runs_and_frees() {
    let source = format!("print {}1;", "!".repeat(50_000));
    let interp = run(&source);
    assert_eq!(interp.output(), "1\n");
}

#[test]
fn deeply_nested_blocks_run_and_free() {
    let depth = 20_000;
    let source = format!("{}print 1;{}", "{".repeat(depth), "}".repeat(depth));
    let mut interp = run(&source);
    assert_eq!(interp.output(), "1\n");
    assert_eq!(interp.feed("print 2;"), Ok(()));
    assert_eq!(interp.output(), "1\n2\n");
}
