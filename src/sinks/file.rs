//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-mode file sink.
///
/// Lines are written straight to the file; the handler flushes after every
/// line. Rotation and retention belong to whatever writer the application
/// plugs in instead.
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open (or create) `path` for appending.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_simple_logger::sinks::FileSink;
    /// use rust_simple_logger::console;
    ///
    /// let sink = FileSink::open("/var/log/app.log").unwrap();
    /// console().set_output(sink);
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::file_sink(path.display().to_string(), "cannot create directory", e)
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), "cannot open", e))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
