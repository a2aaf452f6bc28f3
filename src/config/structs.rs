//! Configuration schema.
//!
//! Every field is optional: a `[loggers.<name>]` table only overrides what it
//! names, leaving the rest of the logger's settings untouched.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// One table per logger, keyed by registry name.
    pub loggers: HashMap<String, LoggerTable>,
}

/// Settings for one logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggerTable {
    /// Threshold level name (e.g. `"debug"`).
    pub level: Option<String>,
    /// Level name at or below which output routes to stderr.
    pub stderr_level: Option<String>,
    pub console_enabled: Option<bool>,
    pub console_color: Option<bool>,
    pub file_enabled: Option<bool>,
    /// Log file path; attaching it is part of applying the config.
    pub file: Option<PathBuf>,
    pub file_rolling_enabled: Option<bool>,
    pub file_rolling_size: Option<u64>,
    /// Truncation limit in characters.
    pub msg_length: Option<usize>,
    /// Whether to capture and print the call site.
    pub msg_method: Option<bool>,
    pub msg_line_number: Option<bool>,
    /// Full source path in the call site instead of the bare file name.
    pub msg_package: Option<bool>,
    pub msg_stack_depth: Option<usize>,
    /// Strftime pattern for record timestamps.
    pub time_pattern: Option<String>,
    /// Name of another configured logger to copy settings from
    /// (everything except the file appender).
    pub inherit: Option<String>,
}
