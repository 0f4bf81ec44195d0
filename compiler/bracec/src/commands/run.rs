//! The `run` command: execute a source file.

use crate::Interpreter;

use super::read_file;

/// Flags accepted by `brace run`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    /// Print the last expression value after the program finishes.
    pub print_result: bool,
}

impl RunOptions {
    /// Parse flags; returns the unrecognized argument on failure.
    pub fn parse<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, &'a str> {
        let mut options = RunOptions::default();
        for arg in args {
            match arg {
                "--result" | "-r" => options.print_result = true,
                other => return Err(other),
            }
        }
        Ok(options)
    }
}

/// Run a Brace source file, printing to stdout.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    let mut interpreter = Interpreter::new();

    if let Err(e) = interpreter.feed(&source) {
        eprintln!("{path}: {e}");
        std::process::exit(1);
    }

    if options.print_result {
        match interpreter.result() {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        }
    }
}
