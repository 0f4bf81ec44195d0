//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    match brace_lexer::lex(&source) {
        Ok(tokens) => {
            println!("Tokens for '{path}' ({} tokens):", tokens.len());
            for tok in &tokens {
                println!("  {} {:?} @ {}", tok.kind, tok.lexeme, tok.position);
            }
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse a file and display the syntax tree.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    match brace_parse::parse(&source) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.len());
            println!();
            for stmt in &program.statements {
                println!("{stmt:#?}");
            }
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}
