//! The error value carried by [`WasmResult`](crate::WasmResult).
//!
//! A [`WasmError`] pairs a byte offset into the module with a message. An
//! empty message means "no error", so the default value is the empty error
//! and every explicitly constructed error must carry a non-empty message.

use std::fmt;

use thiserror::Error;

/// An error detected while decoding or validating a module.
///
/// # Example
///
/// ```
/// # use wasm_result_core::{WasmError, wasm_error};
/// let err = wasm_error!(12, "expected {} bytes, got {}", 4, 2);
///
/// assert!(err.has_error());
/// assert_eq!(err.offset(), 12);
/// assert_eq!(err.message(), "expected 4 bytes, got 2");
/// assert!(WasmError::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message} @+{offset}")]
pub struct WasmError {
    /// Byte offset of the fault in the module.
    offset: u32,

    /// Error message. Empty means "no error".
    message: String,
}

/// The shared empty error, handed out when a successful result is asked for
/// its error.
pub(crate) static NO_ERROR: WasmError = WasmError {
    offset: 0,
    message: String::new(),
};

impl WasmError {
    /// Create an error from an offset and an owned message.
    ///
    /// The message must not be empty, otherwise [`WasmError::is_empty`] would
    /// report "no error". This is checked in debug builds.
    pub fn new(offset: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "WasmError message must not be empty");
        Self { offset, message }
    }

    /// Create an error from an offset and pre-built format arguments.
    ///
    /// The arguments are rendered immediately. Prefer the
    /// [`wasm_error!`](crate::wasm_error) macro at call sites.
    pub fn format(offset: u32, args: fmt::Arguments<'_>) -> Self {
        Self::new(offset, fmt::format(args))
    }

    /// Returns `true` if this value represents "no error".
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    /// Returns `true` if this value carries an error.
    pub fn has_error(&self) -> bool {
        !self.message.is_empty()
    }

    /// Byte offset of the fault.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Borrow the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and take ownership of the message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Construct a [`WasmError`] with a `format!`-style message.
///
/// ```
/// # use wasm_result_core::wasm_error;
/// let section = "code";
/// let err = wasm_error!(40, "unexpected end of {section} section");
/// assert_eq!(err.message(), "unexpected end of code section");
/// ```
#[macro_export]
macro_rules! wasm_error {
    ($offset:expr, $($arg:tt)+) => {
        $crate::WasmError::format($offset, ::std::format_args!($($arg)+))
    };
}
