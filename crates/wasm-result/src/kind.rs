//! Categories of host exception an [`ErrorThrower`](crate::ErrorThrower) can raise.
//!
//! The two general kinds map to the host's built-in error constructors; the
//! three WebAssembly kinds map to the `WebAssembly.*Error` constructors.

use std::fmt;

/// The kind of host exception to raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// A value has the wrong type, e.g. a non-buffer passed as module bytes.
    TypeError,

    /// A value is outside its allowed range.
    RangeError,

    // =========================================================================
    // WebAssembly errors
    // =========================================================================
    /// Decoding or validation of a module failed.
    CompileError,

    /// Instantiation failed while resolving imports.
    LinkError,

    /// A trap or other failure while running module code.
    RuntimeError,
}

impl ExceptionKind {
    /// Returns the name of the host constructor for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::TypeError => "TypeError",
            ExceptionKind::RangeError => "RangeError",
            ExceptionKind::CompileError => "WebAssembly.CompileError",
            ExceptionKind::LinkError => "WebAssembly.LinkError",
            ExceptionKind::RuntimeError => "WebAssembly.RuntimeError",
        }
    }

    /// Returns `true` for the WebAssembly-specific kinds.
    pub fn is_wasm_error(&self) -> bool {
        matches!(
            self,
            ExceptionKind::CompileError | ExceptionKind::LinkError | ExceptionKind::RuntimeError
        )
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_kinds() {
        assert!(!ExceptionKind::TypeError.is_wasm_error());
        assert!(!ExceptionKind::RangeError.is_wasm_error());
        assert!(ExceptionKind::CompileError.is_wasm_error());
        assert!(ExceptionKind::LinkError.is_wasm_error());
        assert!(ExceptionKind::RuntimeError.is_wasm_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExceptionKind::TypeError.to_string(), "TypeError");
        assert_eq!(
            ExceptionKind::CompileError.to_string(),
            "WebAssembly.CompileError"
        );
    }
}
