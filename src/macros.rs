//! Logging and debugging macros.
//!
//! The logging macros add `format!`-style arguments on top of the
//! [`Logger`](crate::Logger) methods:
//!
//! ```
//! use rust_simple_logger::{info, warn, Logger};
//!
//! let logger = Logger::simple();
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! warn!(logger, "{} connections pending", 3);
//! ```
//!
//! The debugging macros capture the calling function, file and line.

/// Log a formatted message at an explicit level.
///
/// ```
/// # use rust_simple_logger::prelude::*;
/// use rust_simple_logger::log;
/// let logger = Logger::simple();
/// log!(logger, LogLevel::Info, "status {}", 200);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, None, format_args!($($arg)+))
    };
}

/// Log at ERROR with an underlying error: `error!(logger, err, "fmt", args..)`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $($arg:tt)+) => {
        $logger.error($err, format_args!($($arg)+))
    };
}

/// Log at ERROR without an underlying error.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log at PANIC. Does not unwind.
#[macro_export]
macro_rules! paninf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.paninf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! emer {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emer(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Log at DEBUG.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

/// Path of the enclosing function, e.g. `my_crate::server::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// [`Caller`](crate::debug::Caller) for the current call site.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::debug::Caller::new($crate::function_name!(), file!(), line!())
    };
}

/// Dump values to stdout between a location banner and a separator.
///
/// Values are rendered through `Debug`. A cycle of strong references (two
/// `Rc<RefCell<_>>` nodes pointing at each other) recurses until the stack
/// overflows; hold back-edges as `Weak`, which print as `(Weak)`.
///
/// ```
/// use rust_simple_logger::dump;
///
/// let retries = 3;
/// let hosts = vec!["a", "b"];
/// dump!(retries, hosts);
/// ```
#[macro_export]
macro_rules! dump {
    ($($value:expr),* $(,)?) => {
        $crate::debug::dump_stdout(
            $crate::caller!(),
            &[$($crate::debug::DumpValue::new(&$value)),*],
        )
    };
}

/// Dump values into a writer; evaluates to `rust_simple_logger::Result<()>`.
///
/// Same rendering, and the same cycle caveat, as [`dump!`].
#[macro_export]
macro_rules! dump_to {
    ($writer:expr $(, $value:expr)* $(,)?) => {
        $crate::debug::dump_to_writer(
            $writer,
            $crate::caller!(),
            &[$($crate::debug::DumpValue::new(&$value)),*],
        )
    };
}

/// Dump values to stdout as colored, indented JSON.
#[macro_export]
macro_rules! json_dump {
    ($($value:expr),* $(,)?) => {
        $crate::debug::json_dump(
            $crate::caller!(),
            &[$($crate::debug::json_value(&$value)),*],
        )
    };
}

/// Annotate an error with the current location.
#[macro_export]
macro_rules! wrap_error {
    ($err:expr) => {
        $crate::debug::wrap_error($crate::caller!(), $err)
    };
}

/// Annotate an error with the current location and a dump of `values`.
#[macro_export]
macro_rules! wrap_error_with_context {
    ($err:expr $(, $value:expr)* $(,)?) => {
        $crate::debug::wrap_error_with_context(
            $crate::caller!(),
            $err,
            &[$($crate::debug::DumpValue::new(&$value)),*],
        )
    };
}

/// Closure wrapping an optional error with the location of this macro call.
#[macro_export]
macro_rules! deferred_wrap {
    ($err:expr) => {
        $crate::debug::deferred_wrap($crate::caller!(), $err)
    };
}

/// Guard that wraps the error left in the slot when the scope ends.
#[macro_export]
macro_rules! deferred_wrap_in_place {
    ($slot:expr) => {
        $crate::debug::deferred_wrap_in_place($crate::caller!(), $slot)
    };
}
