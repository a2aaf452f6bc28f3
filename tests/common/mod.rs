//! Shared helpers: an in-memory stream for capturing console output and a
//! quiet test logger matching the plain-format assertions.
#![allow(dead_code)]

use rotolog::{Level, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory stream; every clone appends to the same buffer, so a
/// test can hand one clone to the console and keep another for assertions.
#[derive(Clone, Default)]
pub struct CapturedStream(Arc<Mutex<Vec<u8>>>);

impl CapturedStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for CapturedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Anonymous logger with call-site capture and padding off, everything to
/// stdout — output reduces to `[<time>] [<LEVEL>] <message>`.
pub fn test_logger(level: Level) -> Logger {
    let logger = Logger::anonymous();
    logger.set_level(level);
    let config = logger.config();
    config.set_stderr_level(Level::OFF);
    config.set_include_method(false);
    config.set_level_pad(0);
    config.set_method_pad(0);
    logger
}

/// Swaps both console streams for captures and returns them as (out, err).
pub fn capture(logger: &Logger) -> (CapturedStream, CapturedStream) {
    let out = CapturedStream::new();
    let err = CapturedStream::new();
    logger.console().set_out(Box::new(out.clone()));
    logger.console().set_err(Box::new(err.clone()));
    (out, err)
}
