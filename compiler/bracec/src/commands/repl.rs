//! Interactive read-eval-print loop.
//!
//! Every line is fed as one source unit to the same [`Interpreter`], so
//! declarations carry over. `:clear` starts a fresh program and `:quit`
//! (or end of input) exits.

use std::io::{self, BufRead, Write};

use crate::Interpreter;

const PROMPT: &str = "brace> ";

pub fn repl() {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            return;
        };

        match line.trim() {
            "" => {}
            ":quit" | ":q" => return,
            ":clear" => interpreter.clear(),
            source => {
                if let Err(e) = interpreter.feed(source) {
                    eprintln!("{e}");
                }
            }
        }
    }
}
