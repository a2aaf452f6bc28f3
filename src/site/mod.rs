//! Per-call-site rate limiting.
//!
//! Fetching a call site on every log call to identify a line of code is
//! expensive, and a logger shared by two call sites can't carry per-site
//! counters. A `LogSite` lives at the call site instead — stored in a field
//! or local — and gates the log call:
//!
//! ```
//! use rotolog::LogSite;
//!
//! let mut debug_site = LogSite::new();
//! for _ in 0..1000 {
//!     if debug_site.every(500) && debug_site.at_most(20) {
//!         // log.debug("inside a hot loop");
//!     }
//! }
//! ```
//!
//! The `&&` composition is load-bearing: Rust's short-circuit means a denial
//! by `every` never advances `at_most`'s counter. The `&mut self` receivers
//! make exclusive per-site ownership a compile-time property — two call sites
//! need two `LogSite` values.

use std::time::{Duration, Instant};

/// Call-site throttle with three independently resettable strategies.
#[derive(Debug, Clone)]
pub struct LogSite {
    rate_limit: bool,
    first_call: bool,
    every_calls: u64,
    at_most_calls: u64,
    last_permit: Option<Instant>,
}

impl Default for LogSite {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSite {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rate_limit: true,
            first_call: true,
            every_calls: 0,
            at_most_calls: 0,
            last_permit: None,
        }
    }

    /// Permits the very first call, then exactly every `n`-th call after it.
    /// `n == 0` never permits. Disabled rate limiting permits without
    /// advancing the counter.
    pub fn every(&mut self, n: u64) -> bool {
        if !self.rate_limit {
            return true;
        }
        if n == 0 {
            return false;
        }
        if self.first_call {
            self.first_call = false;
            return true;
        }
        self.every_calls += 1;
        if self.every_calls < n {
            return false;
        }
        self.every_calls = 0;
        true
    }

    /// Permits exactly the first `n` calls, then denies until a reset. The
    /// counter keeps advancing while denying — this is a hard cutoff, not a
    /// period.
    pub fn at_most(&mut self, n: u64) -> bool {
        if !self.rate_limit {
            return true;
        }
        let calls = self.at_most_calls;
        self.at_most_calls += 1;
        calls < n
    }

    /// Permits a call only when `duration` has elapsed since the last
    /// *permitted* call. Denied calls leave the timer untouched. A zero
    /// duration permits every call.
    pub fn at_most_every(&mut self, duration: Duration) -> bool {
        if !self.rate_limit {
            return true;
        }
        let now = Instant::now();
        let due = self
            .last_permit
            .is_none_or(|last| now.duration_since(last) >= duration);
        if due {
            self.last_permit = Some(now);
        }
        due
    }

    /// When disabled, every strategy permits and no counter advances.
    pub fn set_rate_limit(&mut self, enabled: bool) {
        self.rate_limit = enabled;
    }

    /// Restores all three strategies to their un-called state.
    pub fn reset(&mut self) {
        self.reset_every();
        self.reset_at_most();
        self.reset_at_most_every();
    }

    pub fn reset_every(&mut self) {
        self.first_call = true;
        self.every_calls = 0;
    }

    pub fn reset_at_most(&mut self) {
        self.at_most_calls = 0;
    }

    pub fn reset_at_most_every(&mut self) {
        self.last_permit = None;
    }
}
