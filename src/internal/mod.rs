//! The crate's own diagnostic logger.
//!
//! Configuration mistakes and sink I/O failures are reported here instead of
//! being raised at the logging call site. It is an ordinary level-gated
//! logger (WARN by default) that callers can retune or silence through
//! [`logger`]; its file sink is quiet, so its own write failures are
//! swallowed rather than re-logged through itself.

use crate::logger::Logger;
use std::sync::LazyLock;

static INTERNAL: LazyLock<Logger> = LazyLock::new(Logger::bootstrap);

/// The framework logger. Sometimes it's useful to know what fails internally;
/// turn it off like any other logger when it isn't.
#[must_use]
pub fn logger() -> &'static Logger {
    &INTERNAL
}

#[track_caller]
pub(crate) fn warn(message: &str) {
    INTERNAL.warn(message);
}

#[track_caller]
pub(crate) fn error(message: &str) {
    INTERNAL.error(message);
}

#[track_caller]
pub(crate) fn exception(error: &dyn std::error::Error) {
    INTERNAL.exception(error);
}
