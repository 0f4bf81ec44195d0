//! Print handler for configurable output.
//!
//! `print` statements write through a [`PrintHandlerImpl`]:
//! - Stdout: the default for the `brace` binary
//! - Buffer: captured for tests and for reading back via `output()`
//! - Writer: any host-supplied `io::Write`
//! - Silent: discards everything
//!
//! Enum dispatch instead of trait objects: the set of sinks is closed.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{msg}")?;
        out.flush()
    }
}

/// Captures output into a string buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards each line to a host-supplied writer.
pub struct WriterPrintHandler {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterPrintHandler {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        WriterPrintHandler {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{msg}")?;
        writer.flush()
    }
}

/// Output sink, dispatched by variant.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Writes to a host `io::Write`.
    Writer(WriterPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a line terminator.
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => {
                h.println(msg);
                Ok(())
            }
            Self::Writer(h) => h.println(msg),
            Self::Silent => Ok(()),
        }
    }

    /// Captured output; empty for sinks that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Writer(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for sinks that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn writer_handler(writer: impl Write + Send + 'static) -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Writer(WriterPrintHandler::new(writer)))
}

pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
