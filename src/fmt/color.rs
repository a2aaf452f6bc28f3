//! ANSI SGR escape construction.
//!
//! Colors follow the Select Graphic Rendition subset of CSI: `ESC[FG;BGm`
//! where FG is 30-37 (90-97 bright) and BG is 40-47. A `Color` owns one fully
//! assembled escape sequence so printing it is a single string write.

use std::fmt;

const ESC: &str = "\x1b[";

/// One assembled SGR escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    sgr: String,
}

/// Standard foreground codes.
pub const FG_BLACK: &str = "30";
pub const FG_RED: &str = "31";
pub const FG_GREEN: &str = "32";
pub const FG_YELLOW: &str = "33";
pub const FG_BLUE: &str = "34";
pub const FG_MAGENTA: &str = "35";
pub const FG_CYAN: &str = "36";
pub const FG_WHITE: &str = "37";

/// Bright foreground codes.
pub const FG_BRIGHT_BLACK: &str = "90";
pub const FG_BRIGHT_RED: &str = "91";
pub const FG_BRIGHT_GREEN: &str = "92";
pub const FG_BRIGHT_YELLOW: &str = "93";
pub const FG_BRIGHT_BLUE: &str = "94";
pub const FG_BRIGHT_MAGENTA: &str = "95";
pub const FG_BRIGHT_CYAN: &str = "96";
pub const FG_BRIGHT_WHITE: &str = "97";

/// Background codes.
pub const BG_BLACK: &str = "40";
pub const BG_RED: &str = "41";
pub const BG_GREEN: &str = "42";
pub const BG_YELLOW: &str = "43";
pub const BG_BLUE: &str = "44";
pub const BG_MAGENTA: &str = "45";
pub const BG_CYAN: &str = "46";
pub const BG_WHITE: &str = "47";

impl Color {
    /// Terminates any active styling: `ESC[m`.
    pub const RESET: &'static str = "\x1b[m";

    /// Foreground only.
    #[must_use]
    pub fn fg(fg: &str) -> Self {
        Self {
            sgr: format!("{ESC}{fg}m"),
        }
    }

    /// Bold foreground.
    #[must_use]
    pub fn fg_bold(fg: &str) -> Self {
        Self {
            sgr: format!("{ESC}1;{fg}m"),
        }
    }

    /// Underlined foreground.
    #[must_use]
    pub fn fg_underline(fg: &str) -> Self {
        Self {
            sgr: format!("{ESC}4;{fg}m"),
        }
    }

    /// Reverse-video foreground.
    #[must_use]
    pub fn fg_reverse(fg: &str) -> Self {
        Self {
            sgr: format!("{ESC}7;{fg}m"),
        }
    }

    /// Foreground and background pair.
    #[must_use]
    pub fn of(fg: &str, bg: &str) -> Self {
        Self {
            sgr: format!("{ESC}{fg};{bg}m"),
        }
    }

    /// 24-bit foreground. Not every terminal renders true color, but the ones
    /// that don't degrade gracefully.
    #[must_use]
    pub fn rgb_fg(r: u8, g: u8, b: u8) -> Self {
        Self {
            sgr: format!("{ESC}38;2;{r};{g};{b}m"),
        }
    }

    /// 24-bit foreground and background.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8, r2: u8, g2: u8, b2: u8) -> Self {
        Self {
            sgr: format!("{ESC}38;2;{r};{g};{b}m{ESC}48;2;{r2};{g2};{b2}m"),
        }
    }

    /// The raw escape sequence.
    #[must_use]
    pub fn sgr(&self) -> &str {
        &self.sgr
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sgr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fg_builds_single_code() {
        assert_eq!(Color::fg(FG_RED).sgr(), "\x1b[31m");
    }

    #[test]
    fn of_builds_pair() {
        assert_eq!(Color::of(FG_BRIGHT_WHITE, BG_BLACK).sgr(), "\x1b[97;40m");
    }

    #[test]
    fn rgb_fg_builds_truecolor() {
        assert_eq!(Color::rgb_fg(255, 85, 85).sgr(), "\x1b[38;2;255;85;85m");
    }
}
