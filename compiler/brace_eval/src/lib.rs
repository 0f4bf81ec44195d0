//! Brace Eval - tree-walking evaluator for Brace programs.
//!
//! # Architecture
//!
//! - [`Evaluator`]: executes statements and expressions against a live
//!   scope chain
//! - [`State`]: the scope chain, an arena of frames with LIFO marks
//! - [`Object`]: runtime values, one variant per declarable type
//! - [`evaluate_binary`] / [`evaluate_unary`]: direct enum-based operator
//!   dispatch
//! - [`Completion`]: how a statement finished (normally, or via
//!   `return`/`break`/`continue`)
//!
//! Output from `print` goes through a [`SharedPrintHandler`].

pub mod errors;
pub mod interpreter;
mod object;
mod operators;
mod print_handler;
mod state;

pub use errors::{EvalError, EvalResult};
pub use interpreter::{Completion, Evaluator, ScopedEvaluator};
pub use object::{Object, ObjectType};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, writer_handler, BufferPrintHandler,
    PrintHandlerImpl, SharedPrintHandler, StdoutPrintHandler, WriterPrintHandler,
};
pub use state::{ScopeMark, State};
