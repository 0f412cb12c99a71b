//! # Rust Simple Logger
//!
//! A small leveled logging facade.
//!
//! ## Features
//!
//! - **Pluggable handlers**: the [`LogHandler`] trait, with a line-oriented
//!   [`SimpleHandler`] and an in-memory [`MemoryHandler`](handlers::MemoryHandler)
//! - **Per-level facade**: [`Logger`] with one method per level
//! - **Console singleton**: [`console()`] returns a process-wide, colored logger
//! - **Debug helpers**: value dumps and error annotation carrying the
//!   caller's function, file and line
//!
//! ```
//! use rust_simple_logger::prelude::*;
//! use rust_simple_logger::sinks::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::simple();
//! logger.set_output(buffer.clone());
//!
//! logger.info("ready");
//! assert!(buffer.contents().ends_with("[INFO] ready\n"));
//! ```

pub mod core;
pub mod debug;
pub mod handlers;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        console, BoxError, Direction, LogHandler, LogLevel, Logger, LoggerError, Result,
        TimestampFormat,
    };
    pub use crate::debug::{Caller, WrappedError};
    pub use crate::handlers::SimpleHandler;
}

pub use crate::core::{
    console, BoxError, Direction, LogHandler, LogLevel, Logger, LoggerError, Result, Sink,
    TimestampFormat,
};
pub use debug::{Caller, WrappedError};
pub use handlers::{MemoryHandler, SimpleHandler};
