//! The dispatcher: level gate, call-site capture, truncation, format
//! assembly, and fan-out to console, file, and registered appenders.
//!
//! Logging calls are fire and forget. Nothing on this path returns a
//! `Result`, panics, or blocks beyond the underlying stream write; a failure
//! is terminal to that one call, never to the process.

mod builder;
mod config;
mod registry;

pub use builder::LoggerBuilder;
pub use config::{LoggerConfig, MAX_PAD, MESSAGE_CEILING, MIN_LEVEL_PAD};

use crate::fmt::Color;
use crate::internal;
use crate::level::Level;
use crate::output::{Appender, Console, FileAppender, LogMessage};
use chrono::Utc;
use std::panic::Location;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// The central logging type. Shared via `Arc` and reconfigured through
/// interior mutability, so one logger can serve many threads.
pub struct Logger {
    name: Option<String>,
    /// Threshold: messages log only at a rank at or below this. `OFF`
    /// (the default) silences the logger entirely.
    level: RwLock<Level>,
    config: LoggerConfig,
    console: Console,
    /// One per logger, never shared and never inherited.
    appender: FileAppender,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    pub(crate) fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            level: RwLock::new(Level::OFF),
            config: LoggerConfig::new(),
            console: Console::new(),
            appender: FileAppender::new(),
            appenders: RwLock::new(Vec::new()),
        }
    }

    /// The bootstrap logger for the crate's own diagnostics. Its file sink is
    /// quiet: failures there are swallowed rather than re-logged through
    /// itself.
    pub(crate) fn bootstrap() -> Self {
        let logger = Self {
            name: Some("internal".to_string()),
            level: RwLock::new(Level::WARN),
            config: LoggerConfig::new(),
            console: Console::new(),
            appender: FileAppender::new_quiet(),
            appenders: RwLock::new(Vec::new()),
        };
        logger.config.set_method_pad(80);
        logger
    }

    /// A logger that is not stored in the registry.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::with_name(None)
    }

    /// Get-or-create by name in the process-wide registry.
    #[must_use]
    pub fn by_name(name: &str) -> Arc<Self> {
        registry::by_name(name)
    }

    /// Get-or-create, then set the threshold.
    #[must_use]
    pub fn by_name_with_level(name: &str, level: Level) -> Arc<Self> {
        let logger = registry::by_name(name);
        logger.set_level(level);
        logger
    }

    /// Removes a logger from the registry. Returns whether this exact
    /// instance was registered; a stale handle whose name has since been
    /// re-created removes nothing.
    pub fn remove(logger: &Arc<Self>) -> bool {
        registry::remove(logger)
    }

    /// Number of registered loggers.
    #[must_use]
    pub fn count() -> usize {
        registry::count()
    }

    /// The casual process-wide logger. Not part of the registry.
    #[must_use]
    pub fn global() -> Arc<Self> {
        registry::global()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_level(&self, level: Level) {
        if let Ok(mut current) = self.level.write() {
            *current = level;
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level.read().map_or(Level::OFF, |level| level.clone())
    }

    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    #[must_use]
    pub fn console(&self) -> &Console {
        &self.console
    }

    #[must_use]
    pub fn file_appender(&self) -> &FileAppender {
        &self.appender
    }

    /// Registers a pluggable appender. Appenders receive every accepted
    /// message, in registration order, regardless of console/file settings.
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        if let Ok(mut appenders) = self.appenders.write() {
            appenders.push(appender);
        }
    }

    /// Attaches the file sink. A directory or an unopenable path is reported
    /// to the internal logger and leaves the sink untouched.
    pub fn set_output(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if path.is_dir() {
            internal::error(&format!(
                "cannot attach directory as log file: {}",
                path.display()
            ));
            return;
        }
        if let Err(e) = self.appender.attach(path) {
            internal::exception(&e);
        }
    }

    /// Releases the file handle. Safe to call repeatedly.
    pub fn detach_output(&self) {
        self.appender.detach();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.appender.is_attached()
    }

    /// Copies another logger's threshold, config, and console colors. The
    /// file appender is deliberately excluded: two loggers silently sharing
    /// one file handle is never what inheritance means.
    pub fn inherit(&self, other: &Self) {
        self.set_level(other.level());
        self.config.copy_from(&other.config);
        self.console.inherit_colors(&other.console);
    }

    #[track_caller]
    pub fn log(&self, message: &str, level: &Level) {
        self.dispatch(message, Some(level), None);
    }

    /// Tolerates a missing level: `None` suppresses output silently, the
    /// not-an-error treatment fallible level lookups compose with.
    #[track_caller]
    pub fn log_opt(&self, message: &str, level: Option<&Level>) {
        self.dispatch(message, level, None);
    }

    /// Logs only when the condition holds.
    #[track_caller]
    pub fn log_if(&self, condition: bool, message: &str, level: &Level) {
        if condition {
            self.dispatch(message, Some(level), None);
        }
    }

    #[track_caller]
    pub fn unreachable(&self, message: &str) {
        self.dispatch(message, Some(&Level::UNREACHABLE), None);
    }

    #[track_caller]
    pub fn fatal(&self, message: &str) {
        self.dispatch(message, Some(&Level::FATAL), None);
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.dispatch(message, Some(&Level::ERROR), None);
    }

    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.dispatch(message, Some(&Level::WARN), None);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.dispatch(message, Some(&Level::INFO), None);
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.dispatch(message, Some(&Level::DEBUG), None);
    }

    /// Logs an error at ERROR with its source chain rendered as stack frames
    /// under the message.
    #[track_caller]
    pub fn exception(&self, error: &dyn std::error::Error) {
        let mut stack = vec![self.call_site(Location::caller())];
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push(cause.to_string());
            source = cause.source();
        }
        self.dispatch(&error.to_string(), Some(&Level::ERROR), Some(stack));
    }

    #[track_caller]
    fn dispatch(&self, message: &str, level: Option<&Level>, stack: Option<Vec<String>>) {
        let Some(level) = level else {
            return;
        };
        let threshold = self.level();
        if threshold.is_off() || level.is_off() || level.value() > threshold.value() {
            return;
        }

        let method = if self.config.include_method() {
            self.call_site(Location::caller())
        } else {
            String::new()
        };
        let text = truncate(message, self.config.max_message_length());
        let time = Utc::now().format(&self.config.time_pattern()).to_string();

        let msg = LogMessage {
            time,
            level: level.clone(),
            message: text.to_string(),
            method,
            stack,
        };

        if self.config.console_enabled() {
            let color = self
                .console
                .is_color_enabled()
                .then(|| self.console.color_for(&msg.level));
            let formatted = self.format_message(&msg, color.as_ref());
            if msg.level.value() <= self.config.stderr_level().value() {
                self.console.err_print(&formatted);
            } else {
                self.console.out_print(&formatted);
            }
        }

        if self.config.file_enabled() && self.appender.is_attached() {
            let plain = self.format_message(&msg, None);
            self.appender.write(plain.as_bytes());
        }

        if let Ok(appenders) = self.appenders.read() {
            for appender in appenders.iter() {
                appender.log(&msg);
            }
        }
    }

    /// Deterministic rendering shared by console (optionally colorized) and
    /// file (always plain) output:
    /// bracketed timestamp, padded level tag, padded call site, message,
    /// then any stack frames aligned under the message column. Color opens
    /// before the level tag and resets at the end of each line, so styling
    /// never leaks across lines.
    #[must_use]
    pub fn format_message(&self, msg: &LogMessage, color: Option<&Color>) -> String {
        let mut out = String::with_capacity(128);

        out.push('[');
        out.push_str(&msg.time);
        out.push_str("] ");
        let time_cols = msg.time.chars().count() + 3;

        if let Some(color) = color {
            out.push_str(color.sgr());
        }
        out.push('[');
        out.push_str(msg.level.name());
        out.push_str("] ");
        let tag_cols = msg.level.name().chars().count() + 3;
        let level_pad = self.config.level_pad();
        for _ in tag_cols..level_pad {
            out.push(' ');
        }
        let level_cols = tag_cols.max(level_pad);

        out.push_str(&msg.method);
        let site_cols = msg.method.chars().count();
        let method_pad = self.config.method_pad();
        for _ in site_cols..method_pad {
            out.push(' ');
        }
        let mut method_cols = site_cols.max(method_pad);
        if method_cols > 0 {
            out.push(' ');
            method_cols += 1;
        }

        out.push_str(&msg.message);
        if color.is_some() {
            out.push_str(Color::RESET);
        }
        out.push('\n');

        if let Some(stack) = &msg.stack {
            // Frame 0 duplicates the call site already printed on the
            // message line.
            let indent = time_cols + level_cols + method_cols;
            let depth = self.config.max_stack_depth();
            for frame in stack.iter().skip(1).take(depth) {
                if let Some(color) = color {
                    out.push_str(color.sgr());
                }
                for _ in 0..indent {
                    out.push(' ');
                }
                out.push_str("at ");
                out.push_str(frame);
                if color.is_some() {
                    out.push_str(Color::RESET);
                }
                out.push('\n');
            }
        }

        out
    }

    /// Best-effort call-site string from the caller's source location.
    fn call_site(&self, location: &Location<'_>) -> String {
        let file = location.file();
        let shown = if self.config.include_package() {
            file
        } else {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        };
        if self.config.include_line_number() {
            format!("{shown}:{}", location.line())
        } else {
            shown.to_string()
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// First `max` characters, respecting char boundaries.
fn truncate(message: &str, max: usize) -> &str {
    match message.char_indices().nth(max) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}
