//! Tests for TOML configuration loading.
//!
//! The registry is shared across the test binary, so logger names here are
//! unique to this file.

use rotolog::{configure, configure_str, Error, Level, Logger};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn fields_apply_to_the_named_logger() {
    let raw = r#"
        [loggers.cfg_fields]
        level = "debug"
        stderr_level = "fatal"
        msg_length = 200
        msg_method = false
        file_rolling_enabled = true
        file_rolling_size = 2048
    "#;
    configure_str(raw).unwrap();

    let logger = Logger::by_name("cfg_fields");
    assert_eq!(logger.level(), Level::DEBUG);
    assert_eq!(logger.config().stderr_level(), Level::FATAL);
    assert_eq!(logger.config().max_message_length(), 200);
    assert!(!logger.config().include_method());
    assert!(logger.file_appender().is_rolling());
}

#[test]
fn file_path_is_attached_while_applying() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.log");
    let raw = format!(
        "[loggers.cfg_attach]\nfile = {:?}\n",
        path.to_string_lossy()
    );
    configure_str(&raw).unwrap();

    let logger = Logger::by_name("cfg_attach");
    assert!(logger.is_attached());
    assert!(path.exists());
}

#[test]
fn inherit_copies_settings_but_not_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("base.log");
    let raw = format!(
        r#"
        [loggers.cfg_base]
        level = "warn"
        msg_length = 321
        file = {:?}

        [loggers.cfg_child]
        inherit = "cfg_base"
        "#,
        path.to_string_lossy()
    );
    configure_str(&raw).unwrap();

    let base = Logger::by_name("cfg_base");
    let child = Logger::by_name("cfg_child");
    assert!(base.is_attached());
    assert_eq!(child.level(), Level::WARN);
    assert_eq!(child.config().max_message_length(), 321);
    assert!(!child.is_attached());
}

#[test]
fn inherit_works_regardless_of_table_order() {
    let raw = r#"
        [loggers.cfg_early_child]
        inherit = "cfg_late_base"

        [loggers.cfg_late_base]
        level = "error"
    "#;
    configure_str(raw).unwrap();
    assert_eq!(Logger::by_name("cfg_early_child").level(), Level::ERROR);
}

#[test]
fn unknown_level_name_is_skipped_not_fatal() {
    let raw = r#"
        [loggers.cfg_badlevel]
        level = "loud"
        msg_length = 99
    "#;
    configure_str(raw).unwrap();

    let logger = Logger::by_name("cfg_badlevel");
    // The bad field was dropped, the good one still landed.
    assert_eq!(logger.level(), Level::OFF);
    assert_eq!(logger.config().max_message_length(), 99);
}

#[test]
fn level_names_are_case_insensitive() {
    configure_str("[loggers.cfg_case]\nlevel = \"Info\"\n").unwrap();
    assert_eq!(Logger::by_name("cfg_case").level(), Level::INFO);
}

#[test]
fn toml_syntax_error_is_reported() {
    let result = configure_str("[loggers.broken\nlevel = ");
    assert!(matches!(result, Err(Error::ConfigParse(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = configure(Path::new("/nonexistent/rotolog.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
