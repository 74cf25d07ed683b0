//! An in-memory [`ExecutionContext`] for embedders and tests.
//!
//! [`Isolate`] stores at most one pending and one scheduled
//! [`HostException`] and counts every exception it receives, which makes the
//! "exactly one exception per failed call" rule observable.

use std::cell::{Cell, RefCell};

use log::trace;
use thiserror::Error;

use crate::{context::ExecutionContext, kind::ExceptionKind};

/// An exception object raised into an [`Isolate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HostException {
    kind: ExceptionKind,
    message: String,
}

impl HostException {
    /// Create an exception object.
    pub fn new(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Get the exception kind.
    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Get the exception message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single-threaded execution context with pending and scheduled slots.
///
/// # Example
///
/// ```
/// # use wasm_result::{ErrorThrower, ExceptionKind, Isolate};
/// let isolate = Isolate::new();
/// {
///     let mut thrower = ErrorThrower::new(&isolate, "WebAssembly.compile()");
///     thrower.type_error("Argument 0 must be a buffer source");
/// }
///
/// let exception = isolate.take_pending_exception().unwrap();
/// assert_eq!(exception.kind(), ExceptionKind::TypeError);
/// assert_eq!(
///     exception.message(),
///     "WebAssembly.compile(): Argument 0 must be a buffer source"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Isolate {
    pending: RefCell<Option<HostException>>,
    scheduled: RefCell<Option<HostException>>,
    throw_count: Cell<usize>,
}

impl Isolate {
    /// Create an isolate with no exceptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the pending exception, if any.
    pub fn pending_exception(&self) -> Option<HostException> {
        self.pending.borrow().clone()
    }

    /// Clone of the scheduled exception, if any.
    pub fn scheduled_exception(&self) -> Option<HostException> {
        self.scheduled.borrow().clone()
    }

    /// Remove and return the pending exception, as a caller catching it would.
    pub fn take_pending_exception(&self) -> Option<HostException> {
        self.pending.take()
    }

    /// Remove and return the scheduled exception, as the host does when the
    /// embedder returns control to it.
    pub fn take_scheduled_exception(&self) -> Option<HostException> {
        self.scheduled.take()
    }

    /// Number of exceptions thrown into this isolate so far.
    pub fn throw_count(&self) -> usize {
        self.throw_count.get()
    }
}

impl ExecutionContext for Isolate {
    type Exception = HostException;

    fn new_error(&self, kind: ExceptionKind, message: String) -> HostException {
        HostException { kind, message }
    }

    fn throw(&self, exception: HostException) {
        trace!(kind:% = exception.kind(), message = exception.message(); "Throwing exception");
        self.throw_count.set(self.throw_count.get() + 1);
        *self.pending.borrow_mut() = Some(exception);
    }

    fn has_pending_exception(&self) -> bool {
        self.pending.borrow().is_some()
    }

    fn has_scheduled_exception(&self) -> bool {
        self.scheduled.borrow().is_some()
    }

    fn reschedule_pending_exception(&self) {
        if let Some(exception) = self.pending.take() {
            trace!(kind:% = exception.kind(); "Scheduling pending exception");
            *self.scheduled.borrow_mut() = Some(exception);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_isolate_is_clean() {
        let isolate = Isolate::new();

        assert!(!isolate.has_pending_exception());
        assert!(!isolate.has_scheduled_exception());
        assert_eq!(isolate.throw_count(), 0);
    }

    #[test]
    fn test_throw_sets_pending() {
        let isolate = Isolate::new();
        let exception = isolate.new_error(ExceptionKind::LinkError, "import 0 is not a function".into());

        isolate.throw(exception);

        assert!(isolate.has_pending_exception());
        assert_eq!(isolate.throw_count(), 1);
        assert_eq!(
            isolate.pending_exception(),
            Some(HostException::new(ExceptionKind::LinkError, "import 0 is not a function"))
        );
    }

    #[test]
    fn test_reschedule_moves_pending() {
        let isolate = Isolate::new();
        isolate.throw(HostException::new(ExceptionKind::RuntimeError, "unreachable"));

        isolate.reschedule_pending_exception();

        assert!(!isolate.has_pending_exception());
        assert_eq!(
            isolate.take_scheduled_exception().map(|e| e.kind()),
            Some(ExceptionKind::RuntimeError)
        );
        assert!(!isolate.has_scheduled_exception());
    }

    #[test]
    fn test_reschedule_without_pending_is_noop() {
        let isolate = Isolate::new();

        isolate.reschedule_pending_exception();

        assert!(!isolate.has_scheduled_exception());
    }

    #[test]
    fn test_host_exception_display() {
        let exception = HostException::new(ExceptionKind::RangeError, "maximum must be >= initial");

        assert_eq!(exception.to_string(), "RangeError: maximum must be >= initial");
    }
}
