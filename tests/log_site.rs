//! Tests for call-site rate limiting.

use rotolog::LogSite;
use std::time::Duration;

#[test]
fn every_permits_first_call_then_each_nth() {
    let mut site = LogSite::new();
    let permitted: Vec<bool> = (0..6).map(|_| site.every(5)).collect();
    assert_eq!(permitted, [true, false, false, false, false, true]);
}

#[test]
fn at_most_is_a_hard_cutoff() {
    let mut site = LogSite::new();
    let permitted = (0..10).filter(|_| site.at_most(3)).count();
    assert_eq!(permitted, 3);
}

#[test]
fn composed_strategies_short_circuit() {
    let mut site = LogSite::new();
    // every(3) would permit calls 1, 4, 7, 10, 13, ...; at_most(5) caps the
    // permitted stream at five. A denial by `every` must not advance the
    // `at_most` counter.
    let permitted = (0..13)
        .filter(|_| site.every(3) && site.at_most(5))
        .count();
    assert_eq!(permitted, 5);
}

#[test]
fn zero_duration_always_permits() {
    let mut site = LogSite::new();
    for _ in 0..10 {
        assert!(site.at_most_every(Duration::ZERO));
    }
}

#[test]
fn long_duration_permits_once() {
    let mut site = LogSite::new();
    assert!(site.at_most_every(Duration::from_secs(3600)));
    assert!(!site.at_most_every(Duration::from_secs(3600)));
    assert!(!site.at_most_every(Duration::from_secs(3600)));
}

#[test]
fn denied_calls_leave_the_timer_untouched() {
    let mut site = LogSite::new();
    assert!(site.at_most_every(Duration::from_secs(3600)));
    // A shorter window on a later call still measures from the last permit,
    // not from the last denial.
    assert!(!site.at_most_every(Duration::from_secs(3600)));
    assert!(site.at_most_every(Duration::ZERO));
}

#[test]
fn reset_restores_every_strategy() {
    let mut site = LogSite::new();
    assert!(site.every(2));
    assert!(site.at_most(1));
    assert!(site.at_most_every(Duration::from_secs(3600)));

    site.reset();
    assert!(site.every(2));
    assert!(site.at_most(1));
    assert!(site.at_most_every(Duration::from_secs(3600)));
}

#[test]
fn partial_resets_are_independent() {
    let mut site = LogSite::new();
    assert!(site.at_most(1));
    assert!(!site.at_most(1));
    assert!(site.every(2));

    site.reset_at_most();
    assert!(site.at_most(1));
    // The `every` counter was not touched; the first-call exception stays
    // consumed.
    assert!(!site.every(2));
    assert!(site.every(2));
}
