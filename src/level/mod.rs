//! Severity levels that gate which messages reach which outputs.
//!
//! Ranks grow as severity falls: `OFF` (0) disables a logger outright and
//! `ALL` (`i32::MAX`) lets everything through. A logger emits a message when
//! the message's rank is at or below the configured threshold's rank.
//! Comparisons use the rank only — the name is a display label, never a key.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const OFF_VALUE: i32 = 0;
const UNREACHABLE_VALUE: i32 = 1;
const FATAL_VALUE: i32 = 20;
const ERROR_VALUE: i32 = 30;
const WARN_VALUE: i32 = 40;
const INFO_VALUE: i32 = 50;
const DEBUG_VALUE: i32 = 60;
const ALL_VALUE: i32 = i32::MAX;

/// An ordered severity with a numeric rank and a display name.
///
/// Custom levels slot anywhere above `OFF`; the gaps between built-in ranks
/// exist for exactly that purpose.
#[derive(Debug, Clone)]
pub struct Level {
    value: i32,
    name: Cow<'static, str>,
}

impl Level {
    /// Turns a logger off entirely. No message carries this level to a sink.
    pub const OFF: Self = Self::built_in(OFF_VALUE, "OFF");
    /// Marks code paths that should never execute.
    pub const UNREACHABLE: Self = Self::built_in(UNREACHABLE_VALUE, "UNREACHABLE");
    /// Unrecoverable failures.
    pub const FATAL: Self = Self::built_in(FATAL_VALUE, "FATAL");
    /// Recoverable failures.
    pub const ERROR: Self = Self::built_in(ERROR_VALUE, "ERROR");
    /// Non-threatening anomalies and unexpected parameters.
    pub const WARN: Self = Self::built_in(WARN_VALUE, "WARN");
    /// Informational milestones.
    pub const INFO: Self = Self::built_in(INFO_VALUE, "INFO");
    /// Implementation-level detail.
    pub const DEBUG: Self = Self::built_in(DEBUG_VALUE, "DEBUG");
    /// Permits every message.
    pub const ALL: Self = Self::built_in(ALL_VALUE, "ALL");

    const fn built_in(value: i32, name: &'static str) -> Self {
        Self {
            value,
            name: Cow::Borrowed(name),
        }
    }

    /// Creates a custom level. Ranks at or below `OFF`'s rank would either
    /// disable the message or outrank every threshold, so they are refused.
    #[must_use]
    pub fn custom(value: i32, name: impl Into<String>) -> Option<Self> {
        if value <= OFF_VALUE {
            return None;
        }
        Some(Self {
            value,
            name: Cow::Owned(name.into()),
        })
    }

    /// Resolves a built-in level from its rank.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            OFF_VALUE => Some(Self::OFF),
            UNREACHABLE_VALUE => Some(Self::UNREACHABLE),
            FATAL_VALUE => Some(Self::FATAL),
            ERROR_VALUE => Some(Self::ERROR),
            WARN_VALUE => Some(Self::WARN),
            INFO_VALUE => Some(Self::INFO),
            DEBUG_VALUE => Some(Self::DEBUG),
            ALL_VALUE => Some(Self::ALL),
            _ => None,
        }
    }

    /// Resolves a built-in level by name, case-insensitively. Config files and
    /// level keys use names rather than ranks.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "OFF" => Some(Self::OFF),
            "UNREACHABLE" => Some(Self::UNREACHABLE),
            "FATAL" => Some(Self::FATAL),
            "ERROR" => Some(Self::ERROR),
            "WARN" => Some(Self::WARN),
            "INFO" => Some(Self::INFO),
            "DEBUG" => Some(Self::DEBUG),
            "ALL" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Numeric rank. Lower is more severe, except `OFF` which disables.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the rank that disables logging.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        self.value == OFF_VALUE
    }
}

// Rank-only comparisons: two levels with equal ranks are the same level no
// matter what they are called.
impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl serde::Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
