//! The record handed to sinks and the capability they implement.
//!
//! Built-in sinks (console, rotating file) can't cover every use case — the
//! `Appender` trait lets callers receive every accepted message regardless of
//! console/file settings.

mod console;
mod file;

pub use console::Console;
pub use file::FileAppender;

use crate::level::Level;
use serde::Serialize;

/// One accepted logging event. Built once per accepted call, immutable
/// afterwards; sinks only ever see it by shared reference.
#[derive(Debug, Clone, Serialize)]
pub struct LogMessage {
    /// Timestamp, already rendered with the owning logger's time pattern.
    pub time: String,
    pub level: Level,
    /// Message text, truncated to the logger's maximum length.
    pub message: String,
    /// Call-site string; empty when capture is disabled or unavailable.
    pub method: String,
    /// Captured frames; index 0 duplicates the call-site and is skipped when
    /// rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
}

impl LogMessage {
    /// JSON rendering of the record, for appender implementations that hand
    /// messages to systems speaking JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Pluggable sink capability. The dispatcher invokes every registered
/// appender, in registration order, for each message that passes the level
/// gate — unconditionally, even when console and file output are disabled.
pub trait Appender: Send + Sync {
    fn log(&self, message: &LogMessage);
}
