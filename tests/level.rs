//! Tests for the severity scale.

use rotolog::Level;

#[test]
fn built_ins_are_strictly_ordered() {
    let ascending = [
        Level::OFF,
        Level::UNREACHABLE,
        Level::FATAL,
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::DEBUG,
        Level::ALL,
    ];
    for pair in ascending.windows(2) {
        assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
    }
}

#[test]
fn all_has_maximum_rank() {
    assert_eq!(Level::ALL.value(), i32::MAX);
    let high = Level::custom(i32::MAX - 1, "almost").unwrap();
    assert!(high < Level::ALL);
}

#[test]
fn display_uses_names() {
    assert_eq!(Level::OFF.to_string(), "OFF");
    assert_eq!(Level::UNREACHABLE.to_string(), "UNREACHABLE");
    assert_eq!(Level::FATAL.to_string(), "FATAL");
    assert_eq!(Level::WARN.to_string(), "WARN");
}

#[test]
fn by_name_resolves_case_insensitively() {
    assert_eq!(Level::by_name("debug"), Some(Level::DEBUG));
    assert_eq!(Level::by_name("Error"), Some(Level::ERROR));
    assert_eq!(Level::by_name("ALL"), Some(Level::ALL));
    assert_eq!(Level::by_name("verbose"), None);
}

#[test]
fn from_value_resolves_built_ins_only() {
    assert_eq!(Level::from_value(0), Some(Level::OFF));
    assert_eq!(Level::from_value(30), Some(Level::ERROR));
    assert_eq!(Level::from_value(i32::MAX), Some(Level::ALL));
    assert_eq!(Level::from_value(42), None);
}

#[test]
fn custom_levels_need_positive_ranks() {
    assert!(Level::custom(0, "zero").is_none());
    assert!(Level::custom(-1, "negative").is_none());

    let db = Level::custom(1000, "database").unwrap();
    assert_eq!(db.name(), "database");
    assert!(db > Level::DEBUG);
    assert!(db < Level::ALL);
}

#[test]
fn comparison_is_by_rank_not_name() {
    let alias = Level::custom(40, "WARNING").unwrap();
    assert_eq!(alias, Level::WARN);
}

#[test]
fn off_is_recognized() {
    assert!(Level::OFF.is_off());
    assert!(!Level::FATAL.is_off());
}
