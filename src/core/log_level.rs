//! Log level definitions

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI sequence that closes a colored span.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Severity levels, in declaration order.
///
/// The order is informational only. Handlers dispatch on the level's
/// identity and never filter by a minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Panic = 4,
    Fatal = 5,
    Emer = 6,
    Trace = 7,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Panic,
        LogLevel::Fatal,
        LogLevel::Emer,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
            LogLevel::Emer => "EMER",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Bracketed tag placed in front of every line, e.g. `[ERROR]`.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Panic => "[PANIC]",
            LogLevel::Fatal => "[FATAL]",
            LogLevel::Emer => "[EMER]",
            LogLevel::Trace => "[TRACE]",
        }
    }

    /// Console-mode color. PANIC uses it as a background, the rest as foreground.
    pub fn color(&self) -> Color {
        match self {
            LogLevel::Debug => Color::BrightBlack,
            LogLevel::Warn => Color::BrightYellow,
            LogLevel::Info => Color::Blue,
            LogLevel::Error => Color::BrightRed,
            LogLevel::Emer => Color::Cyan,
            LogLevel::Fatal => Color::Magenta,
            LogLevel::Panic => Color::Red,
            LogLevel::Trace => Color::Green,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            LogLevel::Info | LogLevel::Emer | LogLevel::Fatal | LogLevel::Panic | LogLevel::Trace
        )
    }

    /// Opening ANSI escape used in console mode. Closed by [`COLOR_RESET`].
    pub fn color_code(&self) -> String {
        let color = match self {
            LogLevel::Panic => self.color().to_bg_str(),
            _ => self.color().to_fg_str(),
        };
        if self.is_bold() {
            format!("\x1b[1;{}m", color)
        } else {
            format!("\x1b[{}m", color)
        }
    }

    /// Prepend the level tag to `text`.
    pub fn with_prefix(&self, text: &str) -> String {
        format!("{} {}", self.prefix(), text)
    }

    /// Wrap `text` end to end in this level's color escape pair.
    pub fn colorize(&self, text: &str) -> String {
        format!("{}{}{}", self.color_code(), text, COLOR_RESET)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "PANIC" => Ok(LogLevel::Panic),
            "FATAL" => Ok(LogLevel::Fatal),
            "EMER" | "EMERGENCY" => Ok(LogLevel::Emer),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
