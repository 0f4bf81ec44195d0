//! The embedding API: one persistent program fed a source unit at a time.

use brace_eval::{buffer_handler, stdout_handler, Evaluator, Object, SharedPrintHandler, State};
use brace_parse::Parser;
use tracing::debug;

use crate::Error;

/// Lexes, parses and runs source text against a persistent root scope.
///
/// Each [`feed`](Self::feed) parses its whole input before running any of
/// it, so a lexical or syntax error has no side effects. A runtime error
/// keeps the effects of statements that already ran.
pub struct Interpreter {
    parser: Parser,
    evaluator: Evaluator,
}

impl Interpreter {
    /// Interpreter whose `print` writes to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Interpreter whose `print` output is captured; read it with
    /// [`output`](Self::output).
    pub fn buffered() -> Self {
        Self::with_print_handler(buffer_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            parser: Parser::new(),
            evaluator: Evaluator::with_print_handler(print_handler),
        }
    }

    /// Lex, parse and execute one unit of source.
    pub fn feed(&mut self, source: &str) -> Result<(), Error> {
        let outcome = match self.parser.feed(source) {
            Ok(program) => self.evaluator.eval_program(program).map_err(Error::from),
            Err(e) => Err(Error::from(e)),
        };
        self.parser.clear();
        if let Err(e) = &outcome {
            debug!(kind = ?e.kind(), "feed failed");
        }
        outcome
    }

    /// The last computed expression value as an integer.
    pub fn result(&self) -> Result<i64, Error> {
        Ok(self.evaluator.result()?)
    }

    /// The last computed expression value.
    #[inline]
    pub fn value(&self) -> &Object {
        self.evaluator.value()
    }

    /// Read-only view of the scope chain.
    #[inline]
    pub fn state(&self) -> &State {
        self.evaluator.state()
    }

    /// Output captured so far; empty unless built with a buffer handler.
    pub fn output(&self) -> String {
        self.evaluator.print_handler().get_output()
    }

    /// Start a fresh program: no bindings, no last value, no captured output.
    pub fn clear(&mut self) {
        self.parser.clear();
        self.evaluator.clear();
        self.evaluator.print_handler().clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
