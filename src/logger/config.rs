//! Per-logger formatting and behavior knobs.
//!
//! Every field is read on the hot path without locking (atomics, plus locks
//! only for the non-scalar fields), so concurrent reconfiguration is
//! last-writer-wins per field with no cross-field atomicity — exactly the
//! consistency a logging config needs and no more.

use crate::level::Level;
use chrono::format::{Item, StrftimeItems};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Message lengths at or above this are rejected by the setter; the config
/// keeps its previous limit.
pub const MESSAGE_CEILING: usize = 65_536;
/// Level-field padding never shrinks below this.
pub const MIN_LEVEL_PAD: usize = 4;
/// Pad widths clamp here; anything larger is a misuse, not a layout.
pub const MAX_PAD: usize = 512;

const DEFAULT_MESSAGE_LENGTH: usize = 4096;
const DEFAULT_LEVEL_PAD: usize = 12;
const DEFAULT_STACK_DEPTH: usize = 8;

/// Mutable settings bag, one per logger. Inheriting loggers copy these values
/// field by field; the file appender lives outside the config precisely so
/// that copy can never share a file handle.
#[derive(Debug)]
pub struct LoggerConfig {
    console_enabled: AtomicBool,
    file_enabled: AtomicBool,
    stderr_level: RwLock<Level>,
    include_method: AtomicBool,
    include_line_number: AtomicBool,
    include_package: AtomicBool,
    max_message_length: AtomicUsize,
    level_pad: AtomicUsize,
    method_pad: AtomicUsize,
    max_stack_depth: AtomicUsize,
    time_pattern: RwLock<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerConfig {
    /// Timestamps with date, to the millisecond. The default.
    pub const DEFAULT_TIME_PATTERN: &'static str = "%Y-%m-%d %H:%M:%S%.3f";
    /// Time-of-day only, for short-lived tools.
    pub const TIME_PATTERN: &'static str = "%H:%M:%S";

    #[must_use]
    pub fn new() -> Self {
        Self {
            console_enabled: AtomicBool::new(true),
            file_enabled: AtomicBool::new(true),
            stderr_level: RwLock::new(Level::ERROR),
            include_method: AtomicBool::new(true),
            include_line_number: AtomicBool::new(true),
            include_package: AtomicBool::new(false),
            max_message_length: AtomicUsize::new(DEFAULT_MESSAGE_LENGTH),
            level_pad: AtomicUsize::new(DEFAULT_LEVEL_PAD),
            method_pad: AtomicUsize::new(0),
            max_stack_depth: AtomicUsize::new(DEFAULT_STACK_DEPTH),
            time_pattern: RwLock::new(Self::DEFAULT_TIME_PATTERN.to_string()),
        }
    }

    pub fn set_console_enabled(&self, enabled: bool) {
        self.console_enabled.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn console_enabled(&self) -> bool {
        self.console_enabled.load(Ordering::Relaxed)
    }

    pub fn set_file_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn file_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::Relaxed)
    }

    /// Messages at or below this rank (at least this severe) route to the
    /// error stream; everything above goes to the standard stream.
    pub fn set_stderr_level(&self, level: Level) {
        if let Ok(mut current) = self.stderr_level.write() {
            *current = level;
        }
    }

    #[must_use]
    pub fn stderr_level(&self) -> Level {
        self.stderr_level
            .read()
            .map_or(Level::ERROR, |level| level.clone())
    }

    /// Whether to capture and print the call site.
    pub fn set_include_method(&self, enabled: bool) {
        self.include_method.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn include_method(&self) -> bool {
        self.include_method.load(Ordering::Relaxed)
    }

    pub fn set_include_line_number(&self, enabled: bool) {
        self.include_line_number.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn include_line_number(&self) -> bool {
        self.include_line_number.load(Ordering::Relaxed)
    }

    /// Full source path in the call site instead of the bare file name.
    pub fn set_include_package(&self, enabled: bool) {
        self.include_package.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn include_package(&self) -> bool {
        self.include_package.load(Ordering::Relaxed)
    }

    /// Truncation limit in characters. Values at or above [`MESSAGE_CEILING`]
    /// are rejected and the previous limit stays in effect.
    pub fn set_max_message_length(&self, length: usize) {
        if length >= MESSAGE_CEILING {
            return;
        }
        self.max_message_length.store(length, Ordering::Relaxed);
    }

    #[must_use]
    pub fn max_message_length(&self) -> usize {
        self.max_message_length.load(Ordering::Relaxed)
    }

    /// Column width of the level field, clamped to
    /// [`MIN_LEVEL_PAD`]..=[`MAX_PAD`].
    pub fn set_level_pad(&self, width: usize) {
        self.level_pad
            .store(width.clamp(MIN_LEVEL_PAD, MAX_PAD), Ordering::Relaxed);
    }

    #[must_use]
    pub fn level_pad(&self) -> usize {
        self.level_pad.load(Ordering::Relaxed)
    }

    /// Column width of the call-site field. Zero means no padding.
    pub fn set_method_pad(&self, width: usize) {
        self.method_pad.store(width.min(MAX_PAD), Ordering::Relaxed);
    }

    #[must_use]
    pub fn method_pad(&self) -> usize {
        self.method_pad.load(Ordering::Relaxed)
    }

    /// Maximum number of stack frames rendered under a message.
    pub fn set_max_stack_depth(&self, depth: usize) {
        self.max_stack_depth.store(depth, Ordering::Relaxed);
    }

    #[must_use]
    pub fn max_stack_depth(&self) -> usize {
        self.max_stack_depth.load(Ordering::Relaxed)
    }

    /// Strftime pattern for the record timestamp. A pattern chrono cannot
    /// parse is rejected and the previous pattern stays in effect.
    pub fn set_time_pattern(&self, pattern: &str) {
        let invalid = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
        if invalid {
            return;
        }
        if let Ok(mut current) = self.time_pattern.write() {
            *current = pattern.to_string();
        }
    }

    #[must_use]
    pub fn time_pattern(&self) -> String {
        self.time_pattern
            .read()
            .map_or_else(|_| Self::DEFAULT_TIME_PATTERN.to_string(), |p| p.clone())
    }

    /// Field-by-field value copy from another config. Used by logger
    /// inheritance; the file appender is not part of the config and is never
    /// copied.
    pub fn copy_from(&self, other: &Self) {
        self.set_console_enabled(other.console_enabled());
        self.set_file_enabled(other.file_enabled());
        self.set_stderr_level(other.stderr_level());
        self.set_include_method(other.include_method());
        self.set_include_line_number(other.include_line_number());
        self.set_include_package(other.include_package());
        self.max_message_length
            .store(other.max_message_length(), Ordering::Relaxed);
        self.level_pad.store(other.level_pad(), Ordering::Relaxed);
        self.method_pad.store(other.method_pad(), Ordering::Relaxed);
        self.set_max_stack_depth(other.max_stack_depth());
        if let Ok(mut current) = self.time_pattern.write() {
            *current = other.time_pattern();
        }
    }
}
