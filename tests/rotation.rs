//! Tests for size-triggered rotation and gzip archival.

use flate2::read::GzDecoder;
use rotolog::FileAppender;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::tempdir;

fn archives_in(dir: &Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "zip"))
        .collect()
}

#[test]
fn crossing_the_threshold_rolls_exactly_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roll.log");

    let appender = FileAppender::new();
    appender.set_rolling(true);
    appender.set_roll_size(1024);
    appender.attach(&path).unwrap();

    let payload = vec![b'x'; 2000];
    appender.write(&payload);

    let archives = archives_in(dir.path());
    assert_eq!(archives.len(), 1);
    // The triggering write landed pre-roll: the archive holds all 2000 bytes
    // and the live file restarts empty.
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert_eq!(appender.cursor(), 0);

    let mut decoder = GzDecoder::new(fs::File::open(&archives[0]).unwrap());
    let mut restored = Vec::new();
    decoder.read_to_end(&mut restored).unwrap();
    assert_eq!(restored, payload);
}

#[test]
fn archive_name_carries_the_original_filename() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("named.log");

    let appender = FileAppender::new();
    appender.set_rolling(true);
    appender.set_roll_size(1024);
    appender.attach(&path).unwrap();
    appender.write(&vec![b'y'; 1500]);

    let archives = archives_in(dir.path());
    assert_eq!(archives.len(), 1);
    let archive_name = archives[0].file_name().unwrap().to_string_lossy();
    assert!(archive_name.ends_with("named.log.zip"));
}

#[test]
fn below_threshold_never_rolls() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.log");

    let appender = FileAppender::new();
    appender.set_rolling(true);
    appender.set_roll_size(1024);
    appender.attach(&path).unwrap();
    appender.write(&vec![b'z'; 1023]);

    assert!(archives_in(dir.path()).is_empty());
    assert_eq!(fs::metadata(&path).unwrap().len(), 1023);
}

#[test]
fn rolling_disabled_ignores_the_threshold() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("norolling.log");

    let appender = FileAppender::new();
    appender.set_roll_size(1024);
    appender.attach(&path).unwrap();
    appender.write(&vec![b'q'; 5000]);

    assert!(archives_in(dir.path()).is_empty());
    assert_eq!(fs::metadata(&path).unwrap().len(), 5000);
}

#[test]
fn tiny_roll_sizes_clamp_to_the_floor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clamped.log");

    let appender = FileAppender::new();
    appender.set_rolling(true);
    appender.set_roll_size(10);
    appender.attach(&path).unwrap();

    // 600 bytes sits under the clamped 1 KiB floor: no rotation storm.
    appender.write(&vec![b'c'; 600]);
    assert!(archives_in(dir.path()).is_empty());

    appender.write(&vec![b'c'; 600]);
    assert_eq!(archives_in(dir.path()).len(), 1);
}

#[test]
fn explicit_roll_archives_regardless_of_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manual.log");

    let appender = FileAppender::new();
    appender.attach(&path).unwrap();
    appender.write(b"tiny");
    appender.roll().unwrap();

    assert_eq!(archives_in(dir.path()).len(), 1);
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert_eq!(appender.cursor(), 0);

    // The append handle survives the truncation.
    appender.write(b"next");
    assert_eq!(fs::read_to_string(&path).unwrap(), "next");
}

#[test]
fn rotation_resumes_correctly_across_reattach() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("restart.log");

    let appender = FileAppender::new();
    appender.attach(&path).unwrap();
    appender.write(&vec![b'r'; 700]);
    appender.detach();

    // A fresh appender (as after a process restart) picks the cursor up from
    // the file size, so the next write still triggers the roll.
    let appender = FileAppender::new();
    appender.set_rolling(true);
    appender.set_roll_size(1024);
    appender.attach(&path).unwrap();
    assert_eq!(appender.cursor(), 700);

    appender.write(&vec![b'r'; 400]);
    assert_eq!(archives_in(dir.path()).len(), 1);
}
