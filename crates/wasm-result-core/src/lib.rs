//! # WasmResult Core
//!
//! Value-level error propagation for a WebAssembly front-end.
//!
//! Decoding and validation routines return a [`WasmResult<T>`], which holds
//! either a value or a [`WasmError`] (a byte offset plus a message). Callers
//! check [`WasmResult::is_ok`], extract the value, or forward the error up the
//! call chain. Turning an error into a host exception happens at the API
//! boundary, in the `wasm-result` crate.
//!
//! ## Usage
//!
//! ```
//! # use wasm_result_core::{VoidResult, WasmResult, wasm_error};
//! const MAGIC: &[u8] = b"\0asm";
//!
//! fn check_magic(bytes: &[u8]) -> VoidResult {
//!     if bytes.starts_with(MAGIC) {
//!         VoidResult::default()
//!     } else {
//!         wasm_error!(0, "expected magic word {:02x?}", MAGIC).into()
//!     }
//! }
//!
//! fn module_size(bytes: &[u8]) -> WasmResult<usize> {
//!     let magic = check_magic(bytes);
//!     if magic.failed() {
//!         return magic.into_error().into();
//!     }
//!     WasmResult::from_value(bytes.len())
//! }
//!
//! assert!(module_size(b"\0asm\x01\0\0\0").is_ok());
//! assert_eq!(module_size(b"wasm").error().offset(), 0);
//! ```

mod diagnostic;
mod error;
mod result;

pub use diagnostic::WasmErrorDiagnostic;
pub use error::WasmError;
pub use result::{VoidResult, WasmResult};
