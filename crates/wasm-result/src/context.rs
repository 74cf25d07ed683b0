//! The host runtime seen from an [`ErrorThrower`](crate::ErrorThrower).

use crate::kind::ExceptionKind;

/// The execution context that receives exceptions at an API boundary.
///
/// A context tracks at most one *pending* exception (raised and awaiting
/// propagation to the caller) and at most one *scheduled* exception
/// (deferred until the embedder returns to the host). The two must never
/// coexist.
///
/// Methods take `&self`: a context is shared by every thrower on the call
/// stack, so implementations keep their exception slots in cells.
pub trait ExecutionContext {
    /// Handle to an exception object owned by the host.
    type Exception;

    /// Build an exception object of `kind` carrying `message`.
    fn new_error(&self, kind: ExceptionKind, message: String) -> Self::Exception;

    /// Make `exception` the pending exception.
    fn throw(&self, exception: Self::Exception);

    /// Returns `true` if an exception is pending.
    fn has_pending_exception(&self) -> bool;

    /// Returns `true` if an exception is scheduled.
    fn has_scheduled_exception(&self) -> bool;

    /// Move the pending exception, if any, into the scheduled slot.
    fn reschedule_pending_exception(&self);
}
