//! Console sink: prints pre-formatted records to two streams, colorized per
//! level when enabled.
//!
//! Each print is a single `write_all` of one fully formatted string, so
//! concurrent loggers interleave at whole-message granularity at worst.
//! Write failures are swallowed — a broken pipe must never crash the host.

use crate::fmt::{self, Color};
use crate::level::Level;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

/// Per-level SGR palette. Levels without a dedicated entry (custom levels)
/// fall back to `custom`.
#[derive(Debug, Clone)]
struct Palette {
    unreachable: Color,
    fatal: Color,
    error: Color,
    warn: Color,
    info: Color,
    debug: Color,
    custom: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unreachable: Color::of(fmt::FG_BRIGHT_WHITE, fmt::BG_BLACK),
            fatal: Color::fg_underline(fmt::FG_RED),
            error: Color::fg(fmt::FG_BRIGHT_RED),
            warn: Color::fg(fmt::FG_YELLOW),
            info: Color::fg(fmt::FG_CYAN),
            debug: Color::fg(fmt::FG_MAGENTA),
            custom: Color::fg(fmt::FG_GREEN),
        }
    }
}

struct Streams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// Renders pre-formatted records to a standard and an error stream.
///
/// The streams default to the process stdout/stderr and are swappable, which
/// is how tests capture output.
pub struct Console {
    use_color: AtomicBool,
    streams: Mutex<Streams>,
    palette: RwLock<Palette>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_color: AtomicBool::new(false),
            streams: Mutex::new(Streams {
                out: Box::new(io::stdout()),
                err: Box::new(io::stderr()),
            }),
            palette: RwLock::new(Palette::default()),
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes, so
    /// colorization is opt-in.
    pub fn enable_color(&self, enabled: bool) {
        self.use_color.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_color_enabled(&self) -> bool {
        self.use_color.load(Ordering::Relaxed)
    }

    /// Replaces the standard stream. Tests point this at an in-memory buffer.
    pub fn set_out(&self, out: Box<dyn Write + Send>) {
        if let Ok(mut streams) = self.streams.lock() {
            streams.out = out;
        }
    }

    /// Replaces the error stream.
    pub fn set_err(&self, err: Box<dyn Write + Send>) {
        if let Ok(mut streams) = self.streams.lock() {
            streams.err = err;
        }
    }

    /// Prints one record to the standard stream.
    pub fn out_print(&self, formatted: &str) {
        if let Ok(mut streams) = self.streams.lock() {
            let _ = streams.out.write_all(formatted.as_bytes());
            let _ = streams.out.flush();
        }
    }

    /// Prints one record to the error stream.
    pub fn err_print(&self, formatted: &str) {
        if let Ok(mut streams) = self.streams.lock() {
            let _ = streams.err.write_all(formatted.as_bytes());
            let _ = streams.err.flush();
        }
    }

    /// The SGR color for a level. Built-ins resolve by rank; any other rank
    /// gets the custom-level color.
    #[must_use]
    pub fn color_for(&self, level: &Level) -> Color {
        let Ok(palette) = self.palette.read() else {
            return Color::fg(fmt::FG_WHITE);
        };
        if *level == Level::UNREACHABLE {
            palette.unreachable.clone()
        } else if *level == Level::FATAL {
            palette.fatal.clone()
        } else if *level == Level::ERROR {
            palette.error.clone()
        } else if *level == Level::WARN {
            palette.warn.clone()
        } else if *level == Level::INFO {
            palette.info.clone()
        } else if *level == Level::DEBUG {
            palette.debug.clone()
        } else {
            palette.custom.clone()
        }
    }

    pub fn set_unreachable(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.unreachable = color;
        }
    }

    pub fn set_fatal(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.fatal = color;
        }
    }

    pub fn set_error(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.error = color;
        }
    }

    pub fn set_warn(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.warn = color;
        }
    }

    pub fn set_info(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.info = color;
        }
    }

    pub fn set_debug(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.debug = color;
        }
    }

    /// Color for levels with no dedicated palette entry.
    pub fn set_custom(&self, color: Color) {
        if let Ok(mut p) = self.palette.write() {
            p.custom = color;
        }
    }

    /// Copies another console's palette. Part of logger inheritance; streams
    /// and the color flag stay as they are.
    pub fn inherit_colors(&self, other: &Self) {
        let Ok(theirs) = other.palette.read() else {
            return;
        };
        if let Ok(mut ours) = self.palette.write() {
            *ours = theirs.clone();
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("use_color", &self.is_color_enabled())
            .finish_non_exhaustive()
    }
}
