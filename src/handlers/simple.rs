//! Line-oriented handler writing to a swappable sink

use crate::core::error::error_detail;
use crate::core::{LogHandler, LogLevel, Sink, TimestampFormat};
use parking_lot::Mutex;
use std::error::Error;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

struct HandlerState {
    sink: Sink,
    console: bool,
    timestamp_format: TimestampFormat,
}

/// The production [`LogHandler`].
///
/// Every line has the shape `<timestamp> [<LEVEL>] <message>`, optionally
/// followed by `":\n"` and the error detail. In console mode everything
/// after the timestamp is wrapped in the level's color.
///
/// A single mutex guards the sink and flags. Each call holds it from
/// reading the flags until the write is flushed, so lines from concurrent
/// callers never interleave and a sink swap never lands mid-line.
///
/// # Example
///
/// ```
/// use rust_simple_logger::handlers::SimpleHandler;
/// use rust_simple_logger::sinks::SharedBuffer;
/// use rust_simple_logger::{LogHandler, LogLevel};
///
/// let buffer = SharedBuffer::new();
/// let handler = SimpleHandler::builder().output(buffer.clone()).build();
///
/// handler.log(LogLevel::Info, None, format_args!("listening on {}", 8080));
/// assert!(buffer.contents().ends_with("[INFO] listening on 8080\n"));
/// ```
pub struct SimpleHandler {
    state: Mutex<HandlerState>,
}

impl SimpleHandler {
    /// Handler writing plain lines to stderr.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SimpleHandlerBuilder {
        SimpleHandlerBuilder::new()
    }

    /// Build the message text: the rendered message plus the error detail.
    pub fn stringify_log(err: Option<&(dyn Error + 'static)>, message: fmt::Arguments<'_>) -> String {
        let mut text = message.to_string();
        if let Some(err) = err {
            text.push_str(":\n");
            text.push_str(&error_detail(err));
        }
        text
    }

    fn write_line(state: &mut HandlerState, level: LogLevel, text: &str) {
        let mut text = level.with_prefix(text);
        if state.console {
            text = level.colorize(&text);
        }

        let mut line = state.timestamp_format.stamp(&text);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        // Sink failures are dropped; logging never fails the caller.
        let _ = state.sink.write_all(line.as_bytes());
        let _ = state.sink.flush();
    }
}

impl Default for SimpleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHandler for SimpleHandler {
    fn log(&self, level: LogLevel, err: Option<&(dyn Error + 'static)>, message: fmt::Arguments<'_>) {
        let mut state = self.state.lock();
        let text = Self::stringify_log(err, message);
        Self::write_line(&mut state, level, &text);
    }

    fn print(&self, level: LogLevel, values: &[&dyn fmt::Display]) {
        let mut state = self.state.lock();
        let mut text = String::new();
        for value in values {
            let _ = write!(text, "{}", value);
        }
        Self::write_line(&mut state, level, &text);
    }

    fn set_output(&self, sink: Sink) {
        self.state.lock().sink = sink;
    }

    fn set_console(&self, enabled: bool) {
        self.state.lock().console = enabled;
    }

    fn is_console(&self) -> bool {
        self.state.lock().console
    }
}

/// Builder for [`SimpleHandler`]
///
/// # Example
///
/// ```
/// use rust_simple_logger::handlers::SimpleHandler;
/// use rust_simple_logger::core::TimestampFormat;
///
/// let handler = SimpleHandler::builder()
///     .console(true)
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .build();
/// ```
pub struct SimpleHandlerBuilder {
    sink: Option<Sink>,
    console: bool,
    timestamp_format: TimestampFormat,
}

impl SimpleHandlerBuilder {
    pub fn new() -> Self {
        Self {
            sink: None,
            console: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Write to `sink` instead of stderr.
    #[must_use]
    pub fn output<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> SimpleHandler {
        SimpleHandler {
            state: Mutex::new(HandlerState {
                sink: self.sink.unwrap_or_else(|| Box::new(io::stderr())),
                console: self.console,
                timestamp_format: self.timestamp_format,
            }),
        }
    }
}

impl Default for SimpleHandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
