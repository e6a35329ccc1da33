use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use errlog_core::records::read_records;
use errlog_core::{Level, LoggerConfig, class_name, log_exception};
use tempfile::TempDir;

#[derive(Debug)]
struct RuntimeException(String);

impl fmt::Display for RuntimeException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for RuntimeException {}

struct MyClass;

static HOME: OnceLock<TempDir> = OnceLock::new();
static SERIAL: Mutex<()> = Mutex::new(());

// All tests share one process-wide target, so they run one at a time.
fn setup() -> (MutexGuard<'static, ()>, PathBuf) {
    let guard = SERIAL.lock().unwrap_or_else(|p| p.into_inner());
    let home = HOME.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        errlog_core::configure(
            LoggerConfig::new("MyApp")
                .with_home_dir(dir.path())
                .with_program_name("entry.point"),
        )
        .unwrap();
        dir
    });
    let expected = home.path().join("MyApp/Errors/entry-point.log");
    (guard, expected)
}

fn record_count(path: &Path) -> usize {
    if path.exists() {
        read_records(path).unwrap().len()
    } else {
        0
    }
}

#[test]
fn resolves_configured_target_once() {
    let (_guard, expected) = setup();
    assert_eq!(errlog_core::log_file(), Some(expected.as_path()));
    assert_eq!(errlog_core::log_file(), errlog_core::log_file());
    assert!(errlog_core::configure(LoggerConfig::new("Other")).is_err());
}

#[test]
fn persists_one_record_per_call() {
    let (_guard, path) = setup();
    let before = record_count(&path);

    errlog_core::log(
        class_name::<MyClass>(),
        Level::Error,
        "boom",
        &RuntimeException("x".into()),
    );

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), before + 1);
    let record = records.last().unwrap();
    assert!(record.contains("Date: "));
    assert!(record.contains("Class: entry_point::MyClass"));
    assert!(record.contains("Stack Element: "));
    let exception = record.rsplit("\nException: ").next().unwrap();
    assert!(exception.contains("RuntimeException: x"));
}

#[test]
fn skips_file_when_not_persisting() {
    let (_guard, path) = setup();
    errlog_core::log(
        class_name::<MyClass>(),
        Level::Warn,
        "seed",
        &RuntimeException("seed".into()),
    );
    let meta = fs::metadata(&path).unwrap();

    errlog_core::log_with(
        class_name::<MyClass>(),
        Level::Warn,
        "transient",
        &RuntimeException("not stored".into()),
        false,
    );

    let after = fs::metadata(&path).unwrap();
    assert_eq!(meta.len(), after.len());
    assert_eq!(meta.modified().unwrap(), after.modified().unwrap());
    assert!(
        read_records(&path)
            .unwrap()
            .iter()
            .all(|r| !r.contains("not stored"))
    );
}

#[test]
fn round_trips_many_records() {
    let (_guard, path) = setup();
    let before = record_count(&path);

    for i in 0..5 {
        log_exception!(Level::Error, "batch", &RuntimeException(format!("item {i}")));
    }

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), before + 5);
    for (i, record) in records[before..].iter().enumerate() {
        assert!(record.contains("Class: entry_point"));
        assert!(record.contains(&format!("RuntimeException: item {i}")));
    }
}
