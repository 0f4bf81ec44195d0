//! Command handlers for the `brace` CLI.
//!
//! Each submodule implements one command. Failures are reported on stderr
//! and end the process with exit status 1.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::repl;
pub use run::{run_file, RunOptions};

/// Read a source file or exit with a readable message.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
