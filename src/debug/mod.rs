//! Debug helpers: value dumps and error annotation
//!
//! Everything here writes straight to a writer or stdout and bypasses the
//! log handlers. The macros ([`dump!`](crate::dump), [`json_dump!`](crate::json_dump),
//! [`wrap_error!`](crate::wrap_error), ...) capture the calling function,
//! file and line; the functions take an explicit [`Caller`].

pub mod caller;
pub mod dump;
pub mod json;
pub mod wrap;

pub use caller::{Caller, SEPARATOR};
pub use dump::{dump_error, dump_stdout, dump_to_writer, render_values, DumpValue};
pub use json::{json_dump, json_dump_to_writer, json_value, JsonFormatter, JsonValue};
pub use wrap::{
    deferred_wrap, deferred_wrap_in_place, wrap_error, wrap_error_with_context, wrap_result,
    WrapGuard, WrappedError,
};
