//! Handler implementations

pub mod memory;
pub mod simple;

pub use memory::{LogRecord, MemoryHandler};
pub use simple::{SimpleHandler, SimpleHandlerBuilder};

// Re-export trait for convenience
pub use crate::core::LogHandler;
