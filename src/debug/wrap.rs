//! Error annotation with caller location

use super::caller::{Caller, SEPARATOR};
use super::dump::{render_values, DumpValue};
use crate::core::BoxError;
use std::error::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// An error annotated with the location it was wrapped at.
///
/// The original error stays reachable through [`Error::source`] and
/// [`WrappedError::cause`].
#[derive(Debug)]
pub struct WrappedError {
    caller: Caller,
    context: Option<String>,
    source: BoxError,
}

impl WrappedError {
    pub fn new(caller: Caller, source: impl Into<BoxError>) -> Self {
        Self {
            caller,
            context: None,
            source: source.into(),
        }
    }

    /// Wrap `source`, attaching a dump of `values`.
    pub fn with_context(caller: Caller, source: impl Into<BoxError>, values: &[DumpValue<'_>]) -> Self {
        Self {
            caller,
            context: Some(render_values(values)),
            source: source.into(),
        }
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }

    /// The dumped variables, when wrapped with context.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_cause(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            None => write!(f, "{}\n\nerror in {}", self.source, self.caller),
            Some(context) => write!(
                f,
                "\nerror in {}\n↓↓↓ Debug variables ↓↓↓\n{sep}\n{}{sep}\ncause of error: {}",
                self.caller,
                context,
                self.source,
                sep = SEPARATOR
            ),
        }
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub fn wrap_error(caller: Caller, err: impl Into<BoxError>) -> WrappedError {
    WrappedError::new(caller, err)
}

pub fn wrap_error_with_context(
    caller: Caller,
    err: impl Into<BoxError>,
    values: &[DumpValue<'_>],
) -> WrappedError {
    WrappedError::with_context(caller, err, values)
}

/// Wrap the error of `result`; an `Ok` value passes through untouched.
pub fn wrap_result<T, E: Into<BoxError>>(
    caller: Caller,
    result: Result<T, E>,
) -> Result<T, WrappedError> {
    result.map_err(|err| WrappedError::new(caller, err))
}

/// Closure that wraps `err` when invoked, using the location captured now.
///
/// `None` stays `None`.
pub fn deferred_wrap<E: Into<BoxError>>(
    caller: Caller,
    err: Option<E>,
) -> impl FnOnce() -> Option<WrappedError> {
    move || err.map(|err| WrappedError::new(caller, err))
}

/// Scope guard over an error slot.
///
/// Dereferences to the slot so the guarded scope keeps assigning to it.
/// When the guard drops, an error left in the slot is replaced by its
/// [`WrappedError`] form, annotated with the location the guard was
/// created at.
///
/// ```
/// use rust_simple_logger::core::BoxError;
/// use rust_simple_logger::deferred_wrap_in_place;
///
/// let mut outcome: Option<BoxError> = None;
/// {
///     let mut slot = deferred_wrap_in_place!(&mut outcome);
///     *slot = Some("disk full".into());
/// }
/// assert!(outcome.unwrap().to_string().starts_with("disk full\n\nerror in function["));
/// ```
pub struct WrapGuard<'a> {
    slot: &'a mut Option<BoxError>,
    caller: Caller,
}

impl Deref for WrapGuard<'_> {
    type Target = Option<BoxError>;

    fn deref(&self) -> &Self::Target {
        &*self.slot
    }
}

impl DerefMut for WrapGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.slot
    }
}

impl Drop for WrapGuard<'_> {
    fn drop(&mut self) {
        if let Some(err) = self.slot.take() {
            *self.slot = Some(Box::new(WrappedError::new(self.caller, err)));
        }
    }
}

pub fn deferred_wrap_in_place(caller: Caller, slot: &mut Option<BoxError>) -> WrapGuard<'_> {
    WrapGuard { slot, caller }
}
