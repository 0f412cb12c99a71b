//! Output sinks for handlers

pub mod buffer;
pub mod file;

pub use buffer::SharedBuffer;
pub use file::FileSink;
