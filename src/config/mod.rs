//! TOML configuration loading.
//!
//! Loading is two-phase: create/update every named logger first, then resolve
//! `inherit` references, so inheritance order never depends on table order.
//! Per-field problems (an unknown level name, an unusable path) are reported
//! through the internal logger and the field is skipped — a typo in one key
//! must not take down the rest of the configuration.

mod structs;

pub use structs::{Config, LoggerTable};

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use std::fs;
use std::path::Path;

/// Loads a configuration file and applies it to the registry.
///
/// # Errors
/// `Io` when the file cannot be read; `ConfigParse` on a TOML syntax error.
pub fn configure(path: &Path) -> Result<(), Error> {
    let raw = fs::read_to_string(path)?;
    configure_str(&raw)
}

/// Applies configuration given as a TOML string.
///
/// # Errors
/// `ConfigParse` on a TOML syntax error.
pub fn configure_str(raw: &str) -> Result<(), Error> {
    let config: Config = toml::from_str(raw)?;
    apply(&config);
    Ok(())
}

fn apply(config: &Config) {
    for (name, table) in &config.loggers {
        let logger = Logger::by_name(name);
        apply_table(&logger, table);
    }

    // Inheritance pass: every target logger exists by now.
    for (name, table) in &config.loggers {
        let Some(from) = &table.inherit else {
            continue;
        };
        if !config.loggers.contains_key(from) {
            internal::error(&format!("unsatisfied inheritance: from '{from}' to '{name}'"));
            continue;
        }
        let to_logger = Logger::by_name(name);
        let from_logger = Logger::by_name(from);
        to_logger.inherit(&from_logger);
    }
}

fn apply_table(logger: &Logger, table: &LoggerTable) {
    if let Some(name) = &table.level {
        match Level::by_name(name) {
            Some(level) => logger.set_level(level),
            None => internal::warn(&format!("'{name}' matches no built-in level")),
        }
    }
    if let Some(name) = &table.stderr_level {
        match Level::by_name(name) {
            Some(level) => logger.config().set_stderr_level(level),
            None => internal::warn(&format!("'{name}' matches no built-in level")),
        }
    }
    if let Some(enabled) = table.console_enabled {
        logger.config().set_console_enabled(enabled);
    }
    if let Some(enabled) = table.console_color {
        logger.console().enable_color(enabled);
    }
    if let Some(enabled) = table.file_enabled {
        logger.config().set_file_enabled(enabled);
    }
    if let Some(enabled) = table.file_rolling_enabled {
        logger.file_appender().set_rolling(enabled);
    }
    if let Some(bytes) = table.file_rolling_size {
        logger.file_appender().set_roll_size(bytes);
    }
    if let Some(path) = &table.file {
        // Reports its own failures through the internal logger.
        logger.set_output(path);
    }
    if let Some(length) = table.msg_length {
        logger.config().set_max_message_length(length);
    }
    if let Some(enabled) = table.msg_method {
        logger.config().set_include_method(enabled);
    }
    if let Some(enabled) = table.msg_line_number {
        logger.config().set_include_line_number(enabled);
    }
    if let Some(enabled) = table.msg_package {
        logger.config().set_include_package(enabled);
    }
    if let Some(depth) = table.msg_stack_depth {
        logger.config().set_max_stack_depth(depth);
    }
    if let Some(pattern) = &table.time_pattern {
        logger.config().set_time_pattern(pattern);
    }
}
