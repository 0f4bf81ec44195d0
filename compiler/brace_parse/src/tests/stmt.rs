use brace_ir::{
    AssignOp, BinaryOp, Block, Declaration, Expr, Param, Program, StepOp, Stmt, TypeName,
};
use pretty_assertions::assert_eq;

use super::{parse_ok, single_stmt};

#[test]
fn empty_source_is_an_empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  \n\t ").is_empty());
}

#[test]
fn declarations_with_and_without_initializer() {
    assert_eq!(
        single_stmt("int x = 1;"),
        Stmt::Declaration(Declaration {
            ty: TypeName::Int,
            name: "x".to_string(),
            init: Some(Expr::Integer(1)),
        })
    );
    for (source, ty) in [
        ("int a;", TypeName::Int),
        ("str a;", TypeName::Str),
        ("void a;", TypeName::Void),
        ("fnc a;", TypeName::Fnc),
    ] {
        assert_eq!(
            single_stmt(source),
            Stmt::Declaration(Declaration {
                ty,
                name: "a".to_string(),
                init: None,
            })
        );
    }
}

#[test]
fn assignment_operators() {
    for (source, op) in [
        ("x = 1;", AssignOp::Assign),
        ("x += 1;", AssignOp::Add),
        ("x -= 1;", AssignOp::Sub),
        ("x *= 1;", AssignOp::Mul),
        ("x /= 1;", AssignOp::Div),
        ("x %= 1;", AssignOp::Mod),
    ] {
        assert_eq!(
            single_stmt(source),
            Stmt::Assignment {
                name: "x".to_string(),
                op,
                value: Expr::Integer(1),
            }
        );
    }
}

#[test]
fn increment_and_decrement() {
    assert_eq!(
        single_stmt("i++;"),
        Stmt::Increment {
            name: "i".to_string(),
            op: StepOp::Increment,
        }
    );
    assert_eq!(
        single_stmt("i--;"),
        Stmt::Increment {
            name: "i".to_string(),
            op: StepOp::Decrement,
        }
    );
}

#[test]
fn identifier_without_assignment_is_an_expression() {
    assert_eq!(single_stmt("x;"), Stmt::Expression(Expr::ident("x")));
    assert_eq!(
        single_stmt("x == 1;"),
        Stmt::Expression(Expr::binary(
            BinaryOp::Eq,
            Expr::ident("x"),
            Expr::Integer(1)
        ))
    );
}

#[test]
fn print_with_and_without_value() {
    assert_eq!(
        single_stmt("print 1;"),
        Stmt::Print(Some(Expr::Integer(1)))
    );
    assert_eq!(single_stmt("print;"), Stmt::Print(None));
}

#[test]
fn nested_blocks() {
    assert_eq!(
        single_stmt("{ { } print 1; }"),
        Stmt::Block(Block::new(vec![
            Stmt::Block(Block::default()),
            Stmt::Print(Some(Expr::Integer(1))),
        ]))
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        single_stmt("while (x) x--;"),
        Stmt::While {
            condition: Expr::ident("x"),
            body: Box::new(Stmt::Increment {
                name: "x".to_string(),
                op: StepOp::Decrement,
            }),
        }
    );
}

#[test]
fn for_loop_with_all_clauses() {
    let stmt = single_stmt("for (int i = 0; i < 3; i++) print i;");
    let Stmt::For {
        init,
        condition,
        step,
        body,
    } = &stmt
    else {
        panic!("expected for loop");
    };
    assert!(matches!(init.as_deref(), Some(Stmt::Declaration(_))));
    assert_eq!(
        *condition,
        Some(Expr::binary(
            BinaryOp::Lt,
            Expr::ident("i"),
            Expr::Integer(3)
        ))
    );
    assert!(matches!(step.as_deref(), Some(Stmt::Increment { .. })));
    assert_eq!(**body, Stmt::Print(Some(Expr::ident("i"))));
}

#[test]
fn for_loop_with_empty_clauses() {
    assert_eq!(
        single_stmt("for (;;) break;"),
        Stmt::For {
            init: None,
            condition: None,
            step: None,
            body: Box::new(Stmt::Break),
        }
    );
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let stmt = single_stmt("if (a) if (b) print 1; else print 2;");
    let Stmt::If {
        else_branch: outer_else,
        then_branch,
        ..
    } = &stmt
    else {
        panic!("expected if");
    };
    assert_eq!(*outer_else, None);
    assert!(matches!(
        **then_branch,
        Stmt::If {
            else_branch: Some(_),
            ..
        }
    ));
}

#[test]
fn function_declaration() {
    let stmt = single_stmt("function add(int a, int b) { return a + b; }");
    let Stmt::Function(decl) = &stmt else {
        panic!("expected function");
    };
    assert_eq!(decl.name, "add");
    assert_eq!(
        decl.params,
        vec![
            Param {
                ty: TypeName::Int,
                name: "a".to_string(),
            },
            Param {
                ty: TypeName::Int,
                name: "b".to_string(),
            },
        ]
    );
    assert_eq!(
        decl.body,
        Block::new(vec![Stmt::Return(Some(Expr::binary(
            BinaryOp::Add,
            Expr::ident("a"),
            Expr::ident("b")
        )))])
    );
}

#[test]
fn function_without_parameters() {
    let stmt = single_stmt("function f() { return; }");
    let Stmt::Function(decl) = &stmt else {
        panic!("expected function");
    };
    assert!(decl.params.is_empty());
    assert_eq!(decl.body, Block::new(vec![Stmt::Return(None)]));
}

#[test]
fn break_and_continue() {
    let program = parse_ok("while (1) { break; continue; }");
    let [Stmt::While { body, .. }] = program.statements.as_slice() else {
        panic!("expected while");
    };
    assert_eq!(
        **body,
        Stmt::Block(Block::new(vec![Stmt::Break, Stmt::Continue]))
    );
}

#[test]
fn parser_session_replaces_tree_on_each_feed() {
    let mut parser = crate::Parser::new();
    assert!(parser.ast_root().is_none());

    let first = parser.feed("print 1; print 2;").map(Program::len);
    assert_eq!(first.ok(), Some(2));

    let second = parser.feed("print 3;").map(Program::len);
    assert_eq!(second.ok(), Some(1));

    assert!(parser.feed("print (;").is_err());
    assert!(parser.ast_root().is_none());

    parser.feed("x;").ok();
    assert_eq!(parser.take_root().map(|p| p.len()), Some(1));
    assert!(parser.ast_root().is_none());
}

#[test]
fn feed_tokens_parses_pre_lexed_input() {
    let tokens = match brace_lexer::lex("print 1; x++;") {
        Ok(tokens) => tokens,
        Err(e) => panic!("lex failed: {e}"),
    };
    let mut parser = crate::Parser::new();
    let len = parser.feed_tokens(&tokens).map(Program::len);
    assert_eq!(len.ok(), Some(2));
    assert!(parser.ast_root().is_some());
}
