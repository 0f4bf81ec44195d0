//! Brace - a small imperative scripting language.
//!
//! This crate ties the pipeline together:
//! [`brace_lexer`] → [`brace_parse`] → [`brace_eval`].
//! [`Interpreter`] is the embedding API; the `brace` binary is a thin
//! command line over it.
//!
//! ```text
//! let mut interp = Interpreter::buffered();
//! interp.feed("int x = 6; print x * 7;")?;
//! assert_eq!(interp.output(), "42\n");
//! ```

pub mod commands;
mod error;
mod interpreter;
pub mod tracing_setup;

pub use brace_eval::{
    buffer_handler, silent_handler, stdout_handler, writer_handler, Object, ObjectType,
    SharedPrintHandler, State,
};
pub use error::{Error, ErrorKind};
pub use interpreter::Interpreter;
