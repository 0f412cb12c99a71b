//! Recording handler for tests

use crate::core::error::error_detail;
use crate::core::{LogHandler, LogLevel, Sink};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt::{self, Write as _};

/// One captured log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub error: Option<String>,
}

#[derive(Default)]
struct MemoryState {
    records: Vec<LogRecord>,
    console: bool,
    output_swaps: usize,
}

/// A [`LogHandler`] that keeps every call in memory instead of writing it.
///
/// ```
/// use std::sync::Arc;
/// use rust_simple_logger::handlers::MemoryHandler;
/// use rust_simple_logger::{Logger, LogLevel};
///
/// let handler = Arc::new(MemoryHandler::new());
/// let logger = Logger::new(handler.clone());
/// logger.warn("cache cold");
///
/// let records = handler.records();
/// assert_eq!(records[0].level, LogLevel::Warn);
/// assert_eq!(records[0].message, "cache cold");
/// ```
#[derive(Default)]
pub struct MemoryHandler {
    state: Mutex<MemoryState>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.state.lock().records.clone()
    }

    /// Drain the captured records.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut self.state.lock().records)
    }

    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `set_output` calls received.
    pub fn output_swaps(&self) -> usize {
        self.state.lock().output_swaps
    }
}

impl LogHandler for MemoryHandler {
    fn log(&self, level: LogLevel, err: Option<&(dyn Error + 'static)>, message: fmt::Arguments<'_>) {
        let record = LogRecord {
            level,
            message: message.to_string(),
            error: err.map(error_detail),
        };
        self.state.lock().records.push(record);
    }

    fn print(&self, level: LogLevel, values: &[&dyn fmt::Display]) {
        let mut message = String::new();
        for value in values {
            let _ = write!(message, "{}", value);
        }
        self.state.lock().records.push(LogRecord {
            level,
            message,
            error: None,
        });
    }

    fn set_output(&self, _sink: Sink) {
        self.state.lock().output_swaps += 1;
    }

    fn set_console(&self, enabled: bool) {
        self.state.lock().console = enabled;
    }

    fn is_console(&self) -> bool {
        self.state.lock().console
    }
}
