//! Integration tests for the logger facade
//!
//! These tests verify:
//! - Line format with and without console mode
//! - Error detail rendering
//! - Sink redirection, including file sinks
//! - Debug dumps and error wrapping through the public macros

use rust_simple_logger::core::COLOR_RESET;
use rust_simple_logger::debug::{SEPARATOR, WrappedError};
use rust_simple_logger::handlers::SimpleHandler;
use rust_simple_logger::sinks::{FileSink, SharedBuffer};
use rust_simple_logger::{
    deferred_wrap, deferred_wrap_in_place, dump_to, error, info, wrap_error,
    wrap_error_with_context, BoxError, LogHandler, LogLevel, Logger, TimestampFormat,
};
use std::error::Error;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn buffered_logger() -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let handler = SimpleHandler::builder()
        .output(buffer.clone())
        .timestamp_format(TimestampFormat::Disabled)
        .build();
    (Logger::new(Arc::new(handler)), buffer)
}

#[test]
fn test_every_level_plain_and_colored() {
    for level in LogLevel::ALL {
        let (logger, buffer) = buffered_logger();

        logger.log(level, None, "msg");
        let plain = buffer.contents();
        assert_eq!(plain.lines().count(), 1);
        assert!(plain.contains(level.prefix()));
        assert!(!plain.contains('\x1b'));

        buffer.clear();
        logger.set_console(true);
        logger.log(level, None, "msg");
        let colored = buffer.contents();
        assert_eq!(
            colored,
            format!("{}{} msg{}\n", level.color_code(), level.prefix(), COLOR_RESET)
        );
    }
}

#[test]
fn test_error_detail_section() {
    let (logger, buffer) = buffered_logger();
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "db refused");

    error!(logger, &err, "ctx {}", 1);
    logger.errorf("ctx 2");

    let content = buffer.contents();
    assert!(content.starts_with("[ERROR] ctx 1:\ndb refused\n"));
    assert!(content.ends_with("[ERROR] ctx 2\n"));
    assert_eq!(content.matches("db refused").count(), 1);
}

#[test]
fn test_wrapped_error_detail_lists_cause() {
    let (logger, buffer) = buffered_logger();
    let err = wrap_error!(std::io::Error::new(std::io::ErrorKind::Other, "root cause"));

    logger.error(&err, "request failed");

    let content = buffer.contents();
    assert!(content.contains("request failed:\nroot cause\n\nerror in function["));
    assert!(content.contains("test_wrapped_error_detail_lists_cause"));
    assert!(content.contains("caused by: root cause"));
}

#[test]
fn test_file_sink_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::simple();
    logger.set_output(FileSink::open(&log_file).expect("Failed to open sink"));

    info!(logger, "user {} logged in", 42);
    logger.message(false, "BYE");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" [INFO] user 42 logged in"));
    assert!(lines[1].ends_with(" [DEBUG] <<< BYE"));
}

#[test]
fn test_handler_shared_between_loggers() {
    let buffer = SharedBuffer::new();
    let handler: Arc<dyn LogHandler> = Arc::new(
        SimpleHandler::builder()
            .timestamp_format(TimestampFormat::Disabled)
            .build(),
    );
    let first = Logger::new(handler.clone());
    let second = Logger::new(handler);

    first.set_output(buffer.clone());
    second.warn("from second");

    assert_eq!(buffer.lines(), vec!["[WARN] from second"]);
}

#[test]
fn test_dump_to_writer_macro() {
    let mut out = Vec::new();
    let user = ("ada", 36);
    dump_to!(&mut out, user, "x").unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("function[integration_tests::test_dump_to_writer_macro]"));
    assert!(text.contains("file[tests/integration_tests.rs]"));
    assert!(text.contains("((&str, i32)) (\n    \"ada\",\n    36,\n)\n"));
    assert!(text.contains("(&str) \"x\"\n"));
    assert!(text.ends_with(&format!("{}\n", SEPARATOR)));
}

#[test]
fn test_wrap_error_with_context_macro() {
    let key = "session:7";
    let err = wrap_error_with_context!("cache miss", key);

    let text = err.to_string();
    assert!(text.contains("(&str) \"session:7\""));
    assert!(text.ends_with("cause of error: cache miss"));
    assert_eq!(err.source().unwrap().to_string(), "cache miss");
}

fn load_with_deferred(fail: bool) -> Result<u32, WrappedError> {
    let err: Option<BoxError> = if fail { Some("parse failed".into()) } else { None };
    let finish = deferred_wrap!(err);
    match finish() {
        Some(wrapped) => Err(wrapped),
        None => Ok(7),
    }
}

#[test]
fn test_deferred_wrap_macro() {
    assert_eq!(load_with_deferred(false).unwrap(), 7);

    let err = load_with_deferred(true).unwrap_err();
    assert!(err.caller().function.ends_with("load_with_deferred"));
    assert!(err.to_string().starts_with("parse failed\n\nerror in"));
}

fn store(fail: bool) -> Option<BoxError> {
    let mut outcome: Option<BoxError> = None;
    {
        let mut slot = deferred_wrap_in_place!(&mut outcome);
        if fail {
            *slot = Some("write rejected".into());
        }
    }
    outcome
}

#[test]
fn test_deferred_wrap_in_place_macro() {
    assert!(store(false).is_none());

    let err = store(true).unwrap();
    let wrapped = err.downcast_ref::<WrappedError>().unwrap();
    assert!(wrapped.caller().function.ends_with("store"));
    assert_eq!(wrapped.cause().to_string(), "write rejected");
}
