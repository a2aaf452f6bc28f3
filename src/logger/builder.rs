//! Fluent construction for loggers.
//!
//! Configuring a logger by hand means touching the config, the console, and
//! the file appender separately; the builder walks through all three behind
//! one chain of calls.

use super::{Logger, registry};
use crate::level::Level;
use crate::output::Appender;
use std::path::PathBuf;
use std::sync::Arc;

/// Consuming builder for a [`Logger`].
pub struct LoggerBuilder {
    logger: Arc<Logger>,
    file: Option<PathBuf>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Starts an unnamed logger at INFO. Loggers created outside the builder
    /// default to OFF; a builder is a declaration of intent to log, so it
    /// picks the safe production level instead.
    #[must_use]
    pub fn new() -> Self {
        let logger = Arc::new(Logger::anonymous());
        logger.set_level(Level::INFO);
        Self { logger, file: None }
    }

    /// Configures the registry logger of this name, creating it if needed.
    /// Handles already held under the same name keep pointing at the same
    /// instance and see the builder's settings; the threshold starts at INFO
    /// like `new`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let logger = registry::by_name(&name.into());
        logger.set_level(Level::INFO);
        Self { logger, file: None }
    }

    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.logger.set_level(level);
        self
    }

    #[must_use]
    pub fn console(self, enabled: bool) -> Self {
        self.logger.config().set_console_enabled(enabled);
        self
    }

    #[must_use]
    pub fn color(self, enabled: bool) -> Self {
        self.logger.console().enable_color(enabled);
        self
    }

    /// Threshold at or below which messages route to stderr.
    #[must_use]
    pub fn stderr_level(self, level: Level) -> Self {
        self.logger.config().set_stderr_level(level);
        self
    }

    #[must_use]
    pub fn call_site(self, enabled: bool) -> Self {
        self.logger.config().set_include_method(enabled);
        self
    }

    #[must_use]
    pub fn line_numbers(self, enabled: bool) -> Self {
        self.logger.config().set_include_line_number(enabled);
        self
    }

    #[must_use]
    pub fn full_paths(self, enabled: bool) -> Self {
        self.logger.config().set_include_package(enabled);
        self
    }

    #[must_use]
    pub fn max_message_length(self, length: usize) -> Self {
        self.logger.config().set_max_message_length(length);
        self
    }

    #[must_use]
    pub fn level_pad(self, width: usize) -> Self {
        self.logger.config().set_level_pad(width);
        self
    }

    #[must_use]
    pub fn method_pad(self, width: usize) -> Self {
        self.logger.config().set_method_pad(width);
        self
    }

    #[must_use]
    pub fn max_stack_depth(self, depth: usize) -> Self {
        self.logger.config().set_max_stack_depth(depth);
        self
    }

    #[must_use]
    pub fn time_pattern(self, pattern: &str) -> Self {
        self.logger.config().set_time_pattern(pattern);
        self
    }

    /// Enables file output to `path`. Attachment happens at `build`, so a
    /// bad path surfaces through the internal logger then, not here.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logger.config().set_file_enabled(true);
        self.file = Some(path.into());
        self
    }

    #[must_use]
    pub fn rolling(self, enabled: bool) -> Self {
        self.logger.file_appender().set_rolling(enabled);
        self
    }

    #[must_use]
    pub fn roll_size(self, bytes: u64) -> Self {
        self.logger.file_appender().set_roll_size(bytes);
        self
    }

    #[must_use]
    pub fn appender(self, appender: Box<dyn Appender>) -> Self {
        self.logger.add_appender(appender);
        self
    }

    /// Finishes the logger. Named loggers were fetched from the registry by
    /// `named`; unnamed loggers are returned unregistered.
    #[must_use]
    pub fn build(self) -> Arc<Logger> {
        if let Some(path) = &self.file {
            self.logger.set_output(path);
        }
        self.logger
    }
}
