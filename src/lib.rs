#![forbid(unsafe_code)]

//! `rotolog` - Leveled, multi-sink logging with rotating gzip archives and
//! call-site rate limiting.
//!
//! Messages carry a severity [`Level`]; each [`Logger`] filters by its
//! threshold, formats the record once per sink family, and fans it out to an
//! optionally colorized console, a size-rotating gzip-archiving file sink,
//! and any registered [`Appender`]s. Logging calls never return errors and
//! never panic — sink failures are reported through the crate's internal
//! logger and the failing sink detaches itself.
//!
//! # Example
//!
//! ```
//! use rotolog::{Level, LoggerBuilder};
//!
//! let logger = LoggerBuilder::new()
//!     .level(Level::DEBUG)
//!     .color(true)
//!     .build();
//!
//! logger.info("starting up");
//! logger.debug("connecting to server");
//! logger.warn("connection timeout");
//! ```
//!
//! Hot paths bound their log volume with a per-call-site [`LogSite`]:
//!
//! ```
//! use rotolog::LogSite;
//!
//! let mut site = LogSite::new();
//! for _ in 0..10_000 {
//!     if site.every(500) && site.at_most(5) {
//!         // logger.debug("rare progress report");
//!     }
//! }
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod site;

pub use config::{Config, configure, configure_str};
pub use error::Error;
pub use fmt::Color;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, LoggerConfig};
pub use output::{Appender, Console, FileAppender, LogMessage};
pub use site::LogSite;
