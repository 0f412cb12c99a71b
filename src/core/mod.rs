//! Core logger types and traits

pub mod console;
pub mod error;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use console::console;
pub use error::{error_detail, BoxError, LoggerError, Result};
pub use handler::{Direction, LogHandler, Sink};
pub use log_level::{LogLevel, COLOR_RESET};
pub use logger::Logger;
pub use timestamp::TimestampFormat;
