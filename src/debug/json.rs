//! Colored, indented JSON dumps

use super::caller::{Caller, SEPARATOR};
use crate::core::Result;
use colored::Color;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// A value already converted for a JSON dump, or the reason it could not be.
pub type JsonValue = serde_json::Result<Value>;

/// Convert `value` for [`json_dump`]. Failures are kept, not raised.
pub fn json_value<T: Serialize + ?Sized>(value: &T) -> JsonValue {
    serde_json::to_value(value)
}

/// Pretty printer for `serde_json::Value` with per-kind colors.
///
/// Keys are white, strings green, booleans yellow, numbers cyan and null
/// magenta. Escapes are emitted whenever colors are on, whatever the
/// destination; use [`JsonFormatter::plain`] to turn them off.
///
/// ```
/// use rust_simple_logger::debug::JsonFormatter;
///
/// let value = serde_json::json!({ "ok": true });
/// let text = JsonFormatter::plain().format(&value);
/// assert_eq!(text, "{\n    \"ok\": true\n}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormatter {
    indent: usize,
    colors: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            indent: 4,
            colors: true,
        }
    }

    /// Formatter that never emits color escapes.
    pub fn plain() -> Self {
        Self {
            colors: false,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.colors {
            format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
        } else {
            text
        }
    }

    fn quoted(text: &str) -> String {
        // Serializing a &str into JSON cannot fail.
        serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
    }

    fn pad(&self, out: &mut String, depth: usize) {
        out.extend(std::iter::repeat(' ').take(self.indent * depth));
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str(&self.paint("null".to_string(), Color::Magenta)),
            Value::Bool(b) => out.push_str(&self.paint(b.to_string(), Color::Yellow)),
            Value::Number(n) => out.push_str(&self.paint(n.to_string(), Color::Cyan)),
            Value::String(s) => out.push_str(&self.paint(Self::quoted(s), Color::Green)),
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    self.pad(out, depth + 1);
                    self.write_value(out, item, depth + 1);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.pad(out, depth);
                out.push(']');
            }
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Object(map) => {
                out.push_str("{\n");
                for (i, (key, item)) in map.iter().enumerate() {
                    self.pad(out, depth + 1);
                    out.push_str(&self.paint(Self::quoted(key), Color::White));
                    out.push_str(": ");
                    self.write_value(out, item, depth + 1);
                    if i + 1 < map.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.pad(out, depth);
                out.push('}');
            }
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the banner, one JSON rendering per value and the closing separator.
///
/// A value that failed to serialize is replaced by its error text and the
/// remaining values are still written.
pub fn json_dump_to_writer<W: Write + ?Sized>(
    writer: &mut W,
    formatter: &JsonFormatter,
    caller: Caller,
    values: &[JsonValue],
) -> Result<()> {
    writer.write_all(caller.banner().as_bytes())?;
    for value in values {
        match value {
            Ok(value) => writeln!(writer, "{}", formatter.format(value))?,
            Err(err) => writeln!(writer, "{}", err)?,
        }
    }
    writeln!(writer, "{}", SEPARATOR)?;
    Ok(())
}

/// [`json_dump_to_writer`] on stdout with the default colored formatter.
pub fn json_dump(caller: Caller, values: &[JsonValue]) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = json_dump_to_writer(&mut lock, &JsonFormatter::new(), caller, values);
}
