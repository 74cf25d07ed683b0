//! Scoped collector that turns a front-end error into one host exception.
//!
//! An [`ErrorThrower`] is created at the top of an API entry point. Code below
//! it reports at most one categorized error; when the thrower goes out of
//! scope the recorded error is raised into the [`ExecutionContext`] as the
//! pending exception.

use std::{fmt, mem};

use log::{debug, trace};

use wasm_result_core::WasmError;

use crate::{
    config::{ReportPolicy, ThrowerConfig},
    context::ExecutionContext,
    kind::ExceptionKind,
};

/// Collects one error during an API call and throws it when dropped.
///
/// The thrower borrows its execution context and lives on the stack of the
/// entry point. Its [`Drop`] implementation is the single place where the
/// recorded error reaches the host, so every exit path (early return,
/// `?`, unwinding) delivers it exactly once.
///
/// If the context already has a pending exception when the thrower is
/// dropped (raised by a nested host call), the recorded error is discarded
/// rather than raised on top of it.
///
/// # Example
///
/// ```
/// # use wasm_result::{ErrorThrower, ExceptionKind, Isolate};
/// # use wasm_result_core::WasmError;
/// let isolate = Isolate::new();
///
/// ErrorThrower::scope(&isolate, "WebAssembly.Module()", |thrower| {
///     thrower.compile_failed(&WasmError::new(12, "unexpected token"));
/// });
///
/// let exception = isolate.take_pending_exception().unwrap();
/// assert_eq!(exception.kind(), ExceptionKind::CompileError);
/// assert_eq!(exception.message(), "WebAssembly.Module(): unexpected token @+12");
/// ```
pub struct ErrorThrower<'a, C: ExecutionContext> {
    context: &'a C,
    label: &'a str,
    config: ThrowerConfig,
    kind: Option<ExceptionKind>,
    message: String,
}

impl<'a, C: ExecutionContext> ErrorThrower<'a, C> {
    /// Create a thrower with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `context` - The execution context that receives the exception
    /// * `label` - Name of the API entry point, used as the message prefix
    pub fn new(context: &'a C, label: &'a str) -> Self {
        Self::with_config(context, label, ThrowerConfig::default())
    }

    /// Create a thrower with an explicit configuration.
    pub fn with_config(context: &'a C, label: &'a str, config: ThrowerConfig) -> Self {
        Self {
            context,
            label,
            config,
            kind: None,
            message: String::new(),
        }
    }

    /// Run `f` with a fresh thrower and deliver its error when `f` returns.
    pub fn scope<R>(context: &'a C, label: &'a str, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut thrower = Self::new(context, label);
        f(&mut thrower)
    }

    /// Report a `TypeError`.
    pub fn type_error(&mut self, message: impl fmt::Display) {
        self.report(ExceptionKind::TypeError, message);
    }

    /// Report a `RangeError`.
    pub fn range_error(&mut self, message: impl fmt::Display) {
        self.report(ExceptionKind::RangeError, message);
    }

    /// Report a `WebAssembly.CompileError`.
    pub fn compile_error(&mut self, message: impl fmt::Display) {
        self.report(ExceptionKind::CompileError, message);
    }

    /// Report a `WebAssembly.LinkError`.
    pub fn link_error(&mut self, message: impl fmt::Display) {
        self.report(ExceptionKind::LinkError, message);
    }

    /// Report a `WebAssembly.RuntimeError`.
    pub fn runtime_error(&mut self, message: impl fmt::Display) {
        self.report(ExceptionKind::RuntimeError, message);
    }

    /// Report a decoder or validator failure as a compile error.
    ///
    /// The message is rendered as `"{message} @+{offset}"`. The error must
    /// not be empty; this is checked in debug builds.
    pub fn compile_failed(&mut self, error: &WasmError) {
        debug_assert!(error.has_error(), "compile_failed() called with an empty error");
        self.compile_error(format_args!("{} @+{}", error.message(), error.offset()));
    }

    /// Returns `true` if an error has been recorded.
    pub fn has_error(&self) -> bool {
        self.kind.is_some()
    }

    /// Returns `true` if the recorded error is one of the WebAssembly kinds.
    pub fn is_wasm_error(&self) -> bool {
        self.kind.is_some_and(|kind| kind.is_wasm_error())
    }

    /// The recorded error kind, if any.
    pub fn kind(&self) -> Option<ExceptionKind> {
        self.kind
    }

    /// The rendered message of the recorded error. Empty if there is none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The context label given at construction.
    pub fn context_label(&self) -> &'a str {
        self.label
    }

    /// The execution context this thrower delivers to.
    pub fn context(&self) -> &'a C {
        self.context
    }

    /// The configuration this thrower was built with.
    pub fn config(&self) -> ThrowerConfig {
        self.config
    }

    /// Forget the recorded error without delivering it.
    pub fn reset(&mut self) {
        if let Some(kind) = self.kind.take() {
            trace!(context = self.label, kind:% = kind; "Resetting thrower");
        }
        self.message.clear();
    }

    /// Build the exception object for the recorded error without throwing it.
    ///
    /// The thrower is reset, so dropping it afterwards delivers nothing.
    ///
    /// # Panics
    ///
    /// Panics if no error has been recorded.
    #[must_use]
    pub fn reify(&mut self) -> C::Exception {
        let Some(kind) = self.kind.take() else {
            panic!("reify() called on an ErrorThrower with no recorded error");
        };
        let message = mem::take(&mut self.message);
        self.context.new_error(kind, message)
    }

    /// Throw the recorded error as the pending exception, unless one is
    /// already pending.
    pub(crate) fn deliver(&mut self) {
        if !self.has_error() {
            return;
        }

        if self.context.has_pending_exception() {
            debug!(
                context = self.label,
                message = self.message.as_str();
                "Discarding error, an exception is already pending"
            );
            self.reset();
            return;
        }

        debug_assert!(
            !self.context.has_scheduled_exception(),
            "an existing exception must be pending, never scheduled"
        );
        debug!(context = self.label, kind:? = self.kind; "Throwing recorded error");
        let exception = self.reify();
        self.context.throw(exception);
    }

    fn report(&mut self, kind: ExceptionKind, message: impl fmt::Display) {
        if let Some(recorded) = self.kind {
            if self.config.policy() == ReportPolicy::FirstWins {
                debug!(
                    context = self.label,
                    recorded:% = recorded,
                    ignored:% = kind;
                    "Ignoring error, one is already recorded"
                );
                return;
            }
        }

        self.message = if self.config.prefix_context() && !self.label.is_empty() {
            format!("{}: {message}", self.label)
        } else {
            message.to_string()
        };
        self.kind = Some(kind);
        debug!(context = self.label, kind:% = kind; "Recorded error");
    }
}

impl<C: ExecutionContext> fmt::Debug for ErrorThrower<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorThrower")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl<C: ExecutionContext> Drop for ErrorThrower<'_, C> {
    fn drop(&mut self) {
        self.deliver();
    }
}
