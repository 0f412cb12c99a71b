//! Error types for the logger system

use std::error::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed application error, as carried by wrapped errors and error slots.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failures of the crate's fallible setup and dump paths.
///
/// Logging itself never returns one of these: handler writes are fire and
/// forget.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// File sink error with path
    #[error("File sink error for '{path}': {message}")]
    FileSinkError {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a file sink error with context
    pub fn file_sink(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::FileSinkError {
            path: path.into(),
            message: message.into(),
            source,
        }
    }
}

/// Render an error and its chain of causes, one cause per line.
///
/// ```
/// use rust_simple_logger::core::error::error_detail;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
/// assert_eq!(error_detail(&err), "disk gone");
/// ```
pub fn error_detail(err: &(dyn Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        detail.push_str("\ncaused by: ");
        detail.push_str(&inner.to_string());
        cause = inner.source();
    }
    detail
}
