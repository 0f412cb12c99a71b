//! Timestamp formatting utilities
//!
//! Provides the line timestamp used by [`SimpleHandler`](crate::handlers::SimpleHandler).
//! The default mirrors the classic `date time` stamp (`2025/01/08 10:30:45`,
//! local time).

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for log lines
///
/// # Examples
///
/// ```
/// use rust_simple_logger::core::TimestampFormat;
///
/// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
/// assert_eq!(format.now().len(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// RFC 3339 with local offset: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// No timestamp; lines start with the level tag.
    Disabled,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a local `DateTime` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Disabled => String::new(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }

    /// Prefix `text` with the current timestamp and a single space.
    pub fn stamp(&self, text: &str) -> String {
        match self {
            TimestampFormat::Disabled => text.to_string(),
            _ => format!("{} {}", self.now(), text),
        }
    }
}
