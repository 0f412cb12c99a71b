//! Logger facade

use super::handler::{Direction, LogHandler};
use super::log_level::LogLevel;
use crate::handlers::SimpleHandler;
use std::error::Error;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Per-level convenience wrapper over a shared [`LogHandler`].
///
/// Cloning a `Logger` is cheap and the clones share the handler, so a sink
/// or console-mode change made through one clone is seen by all of them.
///
/// Messages are anything `Display`. A plain string is written verbatim;
/// use the crate's macros (`info!`, `warn!`, ...) for `format!`-style
/// arguments.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    pub fn new(handler: Arc<dyn LogHandler>) -> Self {
        Self { handler }
    }

    /// Logger over a fresh [`SimpleHandler`] writing to stderr.
    pub fn simple() -> Self {
        Self::new(Arc::new(SimpleHandler::new()))
    }

    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }

    pub fn log(&self, level: LogLevel, err: Option<&(dyn Error + 'static)>, message: impl fmt::Display) {
        self.handler.log(level, err, format_args!("{}", message));
    }

    /// Log at ERROR with the detail of `err` appended.
    pub fn error(&self, err: &(dyn Error + 'static), message: impl fmt::Display) {
        self.log(LogLevel::Error, Some(err), message);
    }

    /// Log at ERROR without an underlying error.
    pub fn errorf(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, None, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, None, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, None, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, None, message);
    }

    /// Log the message of `err` at PANIC.
    ///
    /// Only the level is "panic": this method logs and returns normally.
    pub fn panic(&self, err: impl fmt::Display) {
        self.log(LogLevel::Panic, None, err);
    }

    /// Log at PANIC. Returns normally.
    pub fn paninf(&self, message: impl fmt::Display) {
        self.log(LogLevel::Panic, None, message);
    }

    /// Log the message of `err` at FATAL, then exit the process with status 1.
    ///
    /// The process ends immediately after the line is written. No
    /// destructors run on any thread, buffered writers outside the handler
    /// are not flushed, and callers up the stack never regain control.
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        self.log(LogLevel::Fatal, None, err);
        std::process::exit(1)
    }

    pub fn emer(&self, message: impl fmt::Display) {
        self.log(LogLevel::Emer, None, message);
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, None, message);
    }

    /// Log at DEBUG.
    pub fn printf(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, None, message);
    }

    /// Concatenate `values` and log them at DEBUG.
    pub fn print(&self, values: &[&dyn fmt::Display]) {
        self.handler.print(LogLevel::Debug, values);
    }

    pub fn message(&self, direction: impl Into<Direction>, text: &str) {
        self.handler.message(direction.into(), text);
    }

    pub fn set_output<W: Write + Send + 'static>(&self, sink: W) {
        self.handler.set_output(Box::new(sink));
    }

    pub fn set_console(&self, enabled: bool) {
        self.handler.set_console(enabled);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::simple()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("console", &self.handler.is_console())
            .finish()
    }
}
