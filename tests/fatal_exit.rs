//! `Logger::fatal` ends the process, so it is exercised in a child process:
//! the test binary re-runs itself with a marker variable set and only the
//! child actually calls `fatal`.

use rust_simple_logger::Logger;
use std::process::Command;

const CHILD_MARKER: &str = "RUST_SIMPLE_LOGGER_FATAL_CHILD";

#[test]
fn fatal_child_process() {
    if std::env::var_os(CHILD_MARKER).is_none() {
        return;
    }
    let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    Logger::simple().fatal(&err);
}

#[test]
fn test_fatal_exits_with_status_one() {
    let exe = std::env::current_exe().expect("Failed to locate test binary");
    let output = Command::new(exe)
        .args(["fatal_child_process", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("Failed to spawn child");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("[FATAL]"))
        .expect("fatal line missing from stderr");
    assert!(line.ends_with("[FATAL] disk on fire"));
    assert!(!line.contains('\x1b'));
}
