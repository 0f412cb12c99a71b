//! Process-wide console logger

use super::logger::Logger;
use crate::handlers::SimpleHandler;
use std::sync::{Arc, OnceLock};

static CONSOLE: OnceLock<Logger> = OnceLock::new();

/// The shared console logger.
///
/// Built on first use: a [`SimpleHandler`] on stderr with console mode
/// enabled. Concurrent first callers block until the one initialisation
/// finishes and then all receive the same instance; it is never replaced.
///
/// ```
/// use rust_simple_logger::console;
///
/// assert!(std::ptr::eq(console(), console()));
/// console().info("service started");
/// ```
pub fn console() -> &'static Logger {
    CONSOLE.get_or_init(|| {
        let handler = SimpleHandler::builder().console(true).build();
        Logger::new(Arc::new(handler))
    })
}
