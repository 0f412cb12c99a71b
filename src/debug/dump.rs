//! Structural dumps of local values

use super::caller::{Caller, SEPARATOR};
use crate::core::Result;
use std::any::type_name;
use std::fmt;
use std::io::{self, Write};

/// A value queued for dumping, tagged with its type name.
#[derive(Clone, Copy)]
pub struct DumpValue<'a> {
    type_name: &'static str,
    value: &'a dyn fmt::Debug,
}

impl<'a> DumpValue<'a> {
    pub fn new<T: fmt::Debug>(value: &'a T) -> Self {
        Self {
            type_name: type_name::<T>(),
            value,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for DumpValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {:#?}", self.type_name, self.value)
    }
}

/// Render each value as `(<type>) <pretty Debug>` on its own line(s).
///
/// Nested structs, collections and enums are expanded through their
/// `Debug` impls. Shared graphs must break cycles with `Weak` back
/// references, which print as `(Weak)` instead of being followed.
pub fn render_values(values: &[DumpValue<'_>]) -> String {
    values.iter().map(|v| format!("{}\n", v)).collect()
}

/// Write the banner, the dumped values and the closing separator to `writer`.
///
/// Pieces are written one after another without extra locking; concurrent
/// dumps into one unsynchronized writer may interleave.
pub fn dump_to_writer<W: Write + ?Sized>(
    writer: &mut W,
    caller: Caller,
    values: &[DumpValue<'_>],
) -> Result<()> {
    writer.write_all(caller.banner().as_bytes())?;
    writer.write_all(render_values(values).as_bytes())?;
    writeln!(writer, "{}", SEPARATOR)?;
    Ok(())
}

/// [`dump_to_writer`] on stdout. Write errors are ignored.
pub fn dump_stdout(caller: Caller, values: &[DumpValue<'_>]) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = dump_to_writer(&mut lock, caller, values);
}

/// Write the message of `err` to `writer`, with no decoration.
pub fn dump_error<W: Write + ?Sized>(writer: &mut W, err: &dyn fmt::Display) -> Result<()> {
    write!(writer, "{}", err)?;
    Ok(())
}
