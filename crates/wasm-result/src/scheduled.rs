//! Thrower variant for public API entry points.
//!
//! A [`ScheduledErrorThrower`] behaves like an [`ErrorThrower`] while it is
//! alive, but on drop it leaves the context with no pending exception: its own
//! error, or any exception raised by nested host calls (e.g. a start function
//! that trapped), ends up scheduled instead.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use log::debug;

use crate::{config::ThrowerConfig, context::ExecutionContext, thrower::ErrorThrower};

/// An [`ErrorThrower`] that schedules pending exceptions when dropped.
///
/// There may already be a scheduled exception created by an earlier API call;
/// in that case the recorded error is discarded, since pending and scheduled
/// exceptions must never coexist.
///
/// # Example
///
/// ```
/// # use wasm_result::{ExceptionKind, Isolate, ScheduledErrorThrower};
/// let isolate = Isolate::new();
/// {
///     let mut thrower = ScheduledErrorThrower::new(&isolate, "WebAssembly.instantiate()");
///     thrower.link_error("Import #0 \"env\" \"f\": function import requires a callable");
/// }
///
/// assert!(isolate.pending_exception().is_none());
/// let exception = isolate.take_scheduled_exception().unwrap();
/// assert_eq!(exception.kind(), ExceptionKind::LinkError);
/// ```
pub struct ScheduledErrorThrower<'a, C: ExecutionContext> {
    inner: ErrorThrower<'a, C>,
}

impl<'a, C: ExecutionContext> ScheduledErrorThrower<'a, C> {
    /// Create a scheduling thrower with the default configuration.
    pub fn new(context: &'a C, label: &'a str) -> Self {
        Self::with_config(context, label, ThrowerConfig::default())
    }

    /// Create a scheduling thrower with an explicit configuration.
    pub fn with_config(context: &'a C, label: &'a str, config: ThrowerConfig) -> Self {
        Self {
            inner: ErrorThrower::with_config(context, label, config),
        }
    }

    /// Run `f` with a fresh scheduling thrower and finalize it when `f` returns.
    pub fn scope<R>(context: &'a C, label: &'a str, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut thrower = Self::new(context, label);
        f(&mut thrower)
    }
}

impl<'a, C: ExecutionContext> Deref for ScheduledErrorThrower<'a, C> {
    type Target = ErrorThrower<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C: ExecutionContext> DerefMut for ScheduledErrorThrower<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<C: ExecutionContext> fmt::Debug for ScheduledErrorThrower<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScheduledErrorThrower")
            .field(&self.inner)
            .finish()
    }
}

impl<C: ExecutionContext> Drop for ScheduledErrorThrower<'_, C> {
    fn drop(&mut self) {
        let context = self.inner.context();
        debug_assert!(
            !(context.has_pending_exception() && context.has_scheduled_exception()),
            "pending and scheduled exceptions must not coexist"
        );

        if context.has_scheduled_exception() {
            if self.inner.has_error() {
                debug!(
                    context = self.inner.context_label(),
                    message = self.inner.message();
                    "Discarding error, an exception is already scheduled"
                );
            }
            self.inner.reset();
            return;
        }

        self.inner.deliver();

        if context.has_pending_exception() {
            debug!(context = self.inner.context_label(); "Scheduling pending exception");
            context.reschedule_pending_exception();
        }
    }
}
