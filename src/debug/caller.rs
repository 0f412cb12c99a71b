//! Caller-location records

use std::fmt;
use std::panic::Location;

/// Eighty dashes framing every dump block.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Function, file and line of a call site.
///
/// Best-effort metadata: usually built by the [`caller!`](crate::caller)
/// macro, which sees the enclosing function's path. Closures show up as
/// `{{closure}}` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Record the location of whoever called the `#[track_caller]` chain
    /// leading here. `function` is supplied by the caller since the runtime
    /// location carries only file and line.
    #[track_caller]
    pub fn here(function: &'static str) -> Self {
        let location = Location::caller();
        Self::new(function, location.file(), location.line())
    }

    /// Opening block of a dump: blank line, location, header, separator.
    pub fn banner(&self) -> String {
        format!("\n{}\n↓↓↓ Debug variables ↓↓↓\n{}\n", self, SEPARATOR)
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "function[{}] file[{}] line[{}]",
            self.function, self.file, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let caller = Caller::new("app::run", "src/app.rs", 12);
        assert_eq!(caller.to_string(), "function[app::run] file[src/app.rs] line[12]");
    }

    #[test]
    fn test_banner_layout() {
        let banner = Caller::new("app::run", "src/app.rs", 12).banner();
        let lines: Vec<&str> = banner.split('\n').collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "function[app::run] file[src/app.rs] line[12]");
        assert_eq!(lines[2], "↓↓↓ Debug variables ↓↓↓");
        assert_eq!(lines[3].len(), 80);
    }

    #[test]
    fn test_here_tracks_call_site() {
        let expected_line = line!() + 1;
        let caller = Caller::here("tests");
        assert_eq!(caller.line, expected_line);
        assert!(caller.file.ends_with("caller.rs"));
    }

    #[test]
    fn test_caller_macro_names_function() {
        let caller = crate::caller!();
        assert!(caller.function.ends_with("test_caller_macro_names_function"));
        assert!(caller.file.ends_with("caller.rs"));
    }
}
