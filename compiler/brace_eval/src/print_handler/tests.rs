use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;

/// A writer that shares its bytes with the test.
#[derive(Clone, Default)]
struct SharedVec(Arc<Mutex<Vec<u8>>>);

impl Write for SharedVec {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn buffer_handler_appends_lines() {
    let handler = buffer_handler();
    assert!(handler.println("hello").is_ok());
    assert!(handler.println("").is_ok());
    assert_eq!(handler.get_output(), "hello\n\n");
}

#[test]
fn buffer_handler_clear() {
    let handler = buffer_handler();
    assert!(handler.println("x").is_ok());
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn writer_handler_forwards_each_line() {
    let sink = SharedVec::default();
    let handler = writer_handler(sink.clone());
    assert!(handler.println("a").is_ok());
    assert!(handler.println("b").is_ok());
    assert_eq!(sink.0.lock().as_slice(), b"a\nb\n");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn writer_handler_reports_failures() {
    let handler = writer_handler(FailingWriter);
    assert!(handler.println("a").is_err());
}

#[test]
fn silent_handler_discards() {
    let handler = silent_handler();
    assert!(handler.println("ignored").is_ok());
    assert_eq!(handler.get_output(), "");
}
