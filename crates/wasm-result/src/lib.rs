//! # WasmResult
//!
//! Error propagation for a WebAssembly front-end, from the decoder up to the
//! host API boundary.
//!
//! - [`WasmResult`] and [`WasmError`] (re-exported from `wasm-result-core`)
//!   carry failures up the call chain as plain values.
//! - [`ErrorThrower`] collects one categorized error at an API entry point and
//!   raises it into the [`ExecutionContext`] when it goes out of scope.
//! - [`ScheduledErrorThrower`] additionally makes sure no pending exception
//!   is left behind when the entry point returns.
//!
//! ## Usage
//!
//! ```
//! # use wasm_result::{ExceptionKind, Isolate, ScheduledErrorThrower, WasmResult, wasm_error};
//! fn decode_version(bytes: &[u8]) -> WasmResult<u32> {
//!     match bytes.get(4..8) {
//!         Some(v) => WasmResult::from_value(u32::from_le_bytes([v[0], v[1], v[2], v[3]])),
//!         None => wasm_error!(4, "expected 4 bytes for version, got {}", bytes.len().saturating_sub(4)).into(),
//!     }
//! }
//!
//! fn compile(isolate: &Isolate, bytes: &[u8]) -> Option<u32> {
//!     let mut thrower = ScheduledErrorThrower::new(isolate, "WebAssembly.compile()");
//!     let result = decode_version(bytes);
//!     if result.failed() {
//!         thrower.compile_failed(result.error());
//!         return None;
//!     }
//!     Some(result.into_value())
//! }
//!
//! let isolate = Isolate::new();
//! assert_eq!(compile(&isolate, b"\0asm\x01\0\0\0"), Some(1));
//! assert_eq!(compile(&isolate, b"\0asm"), None);
//!
//! let exception = isolate.take_scheduled_exception().unwrap();
//! assert_eq!(exception.kind(), ExceptionKind::CompileError);
//! assert_eq!(
//!     exception.message(),
//!     "WebAssembly.compile(): expected 4 bytes for version, got 0 @+4"
//! );
//! ```

pub mod config;

mod context;
mod isolate;
mod kind;
mod scheduled;
mod thrower;

pub use config::{ConfigError, ReportPolicy, ThrowerConfig};
pub use context::ExecutionContext;
pub use isolate::{HostException, Isolate};
pub use kind::ExceptionKind;
pub use scheduled::ScheduledErrorThrower;
pub use thrower::ErrorThrower;

pub use wasm_result_core::{VoidResult, WasmError, WasmErrorDiagnostic, WasmResult, wasm_error};
