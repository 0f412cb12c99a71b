//! Handler trait for log output

use super::log_level::LogLevel;
use std::error::Error;
use std::fmt;
use std::io::Write;

/// Byte destination a handler writes its lines to.
pub type Sink = Box<dyn Write + Send>;

/// Direction of a protocol message passed to [`LogHandler::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Incoming => ">>> ",
            Direction::Outgoing => "<<< ",
        }
    }
}

impl From<bool> for Direction {
    fn from(incoming: bool) -> Self {
        if incoming {
            Direction::Incoming
        } else {
            Direction::Outgoing
        }
    }
}

/// Formatting and output capability behind a [`Logger`](crate::Logger).
///
/// Implementations must be safe to share between threads. None of the
/// operations report failures: logging is fire and forget.
pub trait LogHandler: Send + Sync {
    /// Log `message` at `level`, followed by the detail of `err` when present.
    fn log(&self, level: LogLevel, err: Option<&(dyn Error + 'static)>, message: fmt::Arguments<'_>);

    /// Log the concatenated `Display` renderings of `values` at `level`.
    fn print(&self, level: LogLevel, values: &[&dyn fmt::Display]);

    /// Log `text` at DEBUG, tagged with the direction marker.
    fn message(&self, direction: Direction, text: &str) {
        self.log(
            LogLevel::Debug,
            None,
            format_args!("{}{}", direction.marker(), text),
        );
    }

    /// Replace the output sink.
    fn set_output(&self, sink: Sink);

    /// Enable or disable color wrapping of output lines.
    fn set_console(&self, enabled: bool);

    fn is_console(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_markers() {
        assert_eq!(Direction::from(true), Direction::Incoming);
        assert_eq!(Direction::from(false).marker(), "<<< ");
        assert_eq!(Direction::Incoming.marker(), ">>> ");
    }
}
