//! The result container returned by decoding and validation routines.
//!
//! [`WasmResult`] holds either a value or a [`WasmError`], never both. It is
//! move-only so exclusively owned payloads are never duplicated on the way up
//! the call chain.

use std::any;

use crate::error::{NO_ERROR, WasmError};

/// Either a value of type `T` or a [`WasmError`].
///
/// # Example
///
/// ```
/// # use wasm_result_core::{WasmError, WasmResult};
/// fn read_u8(bytes: &[u8], pos: usize) -> WasmResult<u8> {
///     match bytes.get(pos) {
///         Some(byte) => WasmResult::from_value(*byte),
///         None => WasmResult::from_error(WasmError::new(pos as u32, "unexpected end")),
///     }
/// }
///
/// let ok = read_u8(&[0x61], 0);
/// assert!(ok.is_ok());
/// assert_eq!(*ok.value(), 0x61);
///
/// let err = read_u8(&[], 3);
/// assert!(err.failed());
/// assert_eq!(err.error().offset(), 3);
/// ```
#[derive(Debug)]
#[must_use]
pub enum WasmResult<T> {
    /// The operation succeeded.
    Value(T),

    /// The operation failed.
    Error(WasmError),
}

/// A result that only carries an error, with no success payload.
pub type VoidResult = WasmResult<()>;

impl<T> WasmResult<T> {
    /// Create a successful result from anything convertible into `T`.
    pub fn from_value(value: impl Into<T>) -> Self {
        check_payload_shape::<T>();
        Self::Value(value.into())
    }

    /// Create a failed result.
    ///
    /// The error must not be empty; this is checked in debug builds.
    pub fn from_error(error: WasmError) -> Self {
        check_payload_shape::<T>();
        debug_assert!(error.has_error(), "WasmResult built from an empty error");
        Self::Error(error)
    }

    /// Returns `true` if this result holds a value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this result holds an error.
    pub fn failed(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics if the result failed.
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Error(error) => panic!("value() called on a failed result: {error}"),
        }
    }

    /// Consume the result and move the value out.
    ///
    /// # Panics
    ///
    /// Panics if the result failed.
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(error) => panic!("into_value() called on a failed result: {error}"),
        }
    }

    /// Borrow the value if there is one.
    pub fn peek(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Borrow the error. A successful result yields the empty error.
    pub fn error(&self) -> &WasmError {
        match self {
            Self::Value(_) => &NO_ERROR,
            Self::Error(error) => error,
        }
    }

    /// Consume the result and move the error out. A successful result yields
    /// the empty error.
    pub fn into_error(self) -> WasmError {
        match self {
            Self::Value(_) => WasmError::default(),
            Self::Error(error) => error,
        }
    }

    /// Convert into a result holding `U`, preserving success or failure.
    ///
    /// On success the value is moved and converted; on failure the error is
    /// carried over unchanged.
    ///
    /// ```
    /// # use wasm_result_core::WasmResult;
    /// let narrow: WasmResult<u32> = WasmResult::from_value(7u32);
    /// let wide: WasmResult<u64> = narrow.map_value_type();
    /// assert_eq!(*wide.value(), 7);
    /// ```
    pub fn map_value_type<U>(self) -> WasmResult<U>
    where
        T: Into<U>,
    {
        match self {
            Self::Value(value) => WasmResult::from_value(value),
            Self::Error(error) => WasmResult::from_error(error),
        }
    }

    /// Convert into a standard [`Result`] so failures can be propagated with `?`.
    pub fn into_result(self) -> Result<T, WasmError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl<T: Default> Default for WasmResult<T> {
    fn default() -> Self {
        Self::from_value(T::default())
    }
}

impl<T> From<WasmError> for WasmResult<T> {
    fn from(error: WasmError) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<Result<T, WasmError>> for WasmResult<T> {
    fn from(result: Result<T, WasmError>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<WasmResult<T>> for Result<T, WasmError> {
    fn from(result: WasmResult<T>) -> Self {
        result.into_result()
    }
}

/// Reject payload types that cannot be expressed as trait bounds: the error
/// type itself, and references.
fn check_payload_shape<T>() {
    debug_assert!(
        any::type_name::<T>() != any::type_name::<WasmError>(),
        "WasmResult must not hold a WasmError as its value"
    );
    debug_assert!(
        !any::type_name::<T>().starts_with('&'),
        "WasmResult must not hold a reference as its value"
    );
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::wasm_error;

    #[test]
    fn test_from_value() {
        let result: WasmResult<u32> = WasmResult::from_value(42u32);

        assert!(result.is_ok());
        assert!(!result.failed());
        assert_eq!(*result.value(), 42);
        assert!(result.error().is_empty());
    }

    #[test]
    fn test_from_value_converts() {
        let result: WasmResult<String> = WasmResult::from_value("func");

        assert_eq!(result.value(), "func");
    }

    #[test]
    fn test_from_error() {
        let result: WasmResult<u32> = WasmResult::from_error(WasmError::new(5, "bad magic"));

        assert!(result.failed());
        assert!(!result.is_ok());
        assert_eq!(result.error().message(), "bad magic");
        assert_eq!(result.error().offset(), 5);
        assert!(result.peek().is_none());
    }

    #[test]
    fn test_default_holds_default_value() {
        let result: WasmResult<Vec<u8>> = WasmResult::default();

        assert!(result.is_ok());
        assert!(result.value().is_empty());
    }

    #[test]
    fn test_void_result() {
        let ok: VoidResult = VoidResult::default();
        let err: VoidResult = wasm_error!(9, "missing end opcode").into();

        assert!(ok.is_ok());
        assert!(err.failed());
    }

    #[test]
    fn test_into_value_moves_unique_payload() {
        let result: WasmResult<Box<[u8]>> = WasmResult::from_value(vec![0u8, 97, 115, 109]);

        let bytes = result.into_value();
        assert_eq!(&*bytes, b"\0asm");
    }

    #[test]
    fn test_into_error_on_success_is_empty() {
        let result: WasmResult<u8> = WasmResult::from_value(1u8);

        assert!(result.into_error().is_empty());
    }

    #[test]
    #[should_panic(expected = "failed result")]
    fn test_value_on_failure_panics() {
        let result: WasmResult<u8> = WasmResult::from_error(WasmError::new(0, "boom"));
        let _ = result.value();
    }

    #[test]
    fn test_map_value_type_failure_keeps_error() {
        let narrow: WasmResult<u8> = WasmResult::from_error(WasmError::new(17, "invalid type"));

        let wide: WasmResult<u32> = narrow.map_value_type();
        assert!(wide.failed());
        assert_eq!(wide.error(), &WasmError::new(17, "invalid type"));
    }

    #[test]
    fn test_into_result_supports_question_mark() {
        fn decode(input: WasmResult<u8>) -> Result<u16, WasmError> {
            let byte = input.into_result()?;
            Ok(u16::from(byte) + 1)
        }

        assert_eq!(decode(WasmResult::from_value(1u8)), Ok(2));
        assert_eq!(
            decode(WasmResult::from_error(WasmError::new(2, "truncated"))),
            Err(WasmError::new(2, "truncated"))
        );
    }

    #[test]
    fn test_from_std_result() {
        let result: WasmResult<u8> = Ok::<u8, WasmError>(3).into();
        assert_eq!(*result.value(), 3);

        let result: WasmResult<u8> = Err::<u8, WasmError>(WasmError::new(1, "nope")).into();
        assert!(result.failed());
    }

    #[test]
    #[should_panic(expected = "must not hold a reference")]
    #[cfg(debug_assertions)]
    fn test_reference_payload_rejected() {
        let byte = 0u8;
        let _ = WasmResult::<&u8>::from_value(&byte);
    }

    proptest! {
        #[test]
        fn prop_value_round_trips_through_accessors(value in any::<u64>()) {
            let borrowed = WasmResult::<u64>::from_value(value);
            prop_assert_eq!(*borrowed.value(), value);
            prop_assert_eq!(borrowed.peek(), Some(&value));
            prop_assert_eq!(borrowed.into_value(), value);
        }

        #[test]
        fn prop_map_value_type_preserves_outcome(
            value in any::<u16>(),
            offset in any::<u32>(),
            message in ".+",
            fail in any::<bool>(),
        ) {
            let narrow: WasmResult<u16> = if fail {
                WasmResult::from_error(WasmError::new(offset, message.clone()))
            } else {
                WasmResult::from_value(value)
            };

            let wide: WasmResult<u64> = narrow.map_value_type();
            prop_assert_eq!(wide.failed(), fail);
            if fail {
                prop_assert_eq!(wide.error().offset(), offset);
                prop_assert_eq!(wide.error().message(), message.as_str());
            } else {
                prop_assert_eq!(*wide.value(), u64::from(value));
            }
        }
    }
}
