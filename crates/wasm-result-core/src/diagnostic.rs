//! Adapter for rendering a [`WasmError`] as a miette diagnostic.
//!
//! The adapter points a label at the error offset inside the module source,
//! so embedders that already render miette reports can show decoder and
//! validator failures in context.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use crate::error::WasmError;

/// Diagnostic code reported for every wrapped [`WasmError`].
const ERROR_CODE: &str = "wasm::error";

/// Adapter for a single [`WasmError`].
///
/// # Example
///
/// ```
/// # use miette::Diagnostic;
/// # use wasm_result_core::{WasmError, WasmErrorDiagnostic};
/// let err = WasmError::new(6, "unknown section");
/// let diag = WasmErrorDiagnostic::new(&err).with_source("(module (foo))");
///
/// assert_eq!(diag.to_string(), "unknown section");
/// assert_eq!(diag.labels().unwrap().count(), 1);
/// ```
pub struct WasmErrorDiagnostic<'a> {
    /// The wrapped error
    error: &'a WasmError,
    /// Source text the offset points into, if available
    src: Option<&'a str>,
}

impl<'a> WasmErrorDiagnostic<'a> {
    /// Create an adapter without source text.
    pub fn new(error: &'a WasmError) -> Self {
        Self { error, src: None }
    }

    /// Attach the source text the error offset points into.
    pub fn with_source(mut self, src: &'a str) -> Self {
        self.src = Some(src);
        self
    }

    /// Span covering the byte at the error offset, clamped to the source.
    fn span(&self, src: &str) -> SourceSpan {
        let start = (self.error.offset() as usize).min(src.len());
        let len = usize::from(start < src.len());
        SourceSpan::new(start.into(), len)
    }
}

impl fmt::Debug for WasmErrorDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WasmErrorDiagnostic")
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for WasmErrorDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error.message())
    }
}

impl std::error::Error for WasmErrorDiagnostic<'_> {}

impl MietteDiagnostic for WasmErrorDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(ERROR_CODE))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.src
            .as_ref()
            .map(|src| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let src = self.src?;
        let label = format!("error at offset {}", self.error.offset());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(label), self.span(src)),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = WasmError::new(4, "invalid version");
        let diag = WasmErrorDiagnostic::new(&err);

        assert_eq!(diag.to_string(), "invalid version");
    }

    #[test]
    fn test_code() {
        let err = WasmError::new(4, "invalid version");
        let diag = WasmErrorDiagnostic::new(&err);

        assert_eq!(diag.code().unwrap().to_string(), "wasm::error");
    }

    #[test]
    fn test_no_labels_without_source() {
        let err = WasmError::new(4, "invalid version");
        let diag = WasmErrorDiagnostic::new(&err);

        assert!(diag.labels().is_none());
        assert!(diag.source_code().is_none());
    }

    #[test]
    fn test_label_points_at_offset() {
        let err = WasmError::new(8, "unexpected token");
        let diag = WasmErrorDiagnostic::new(&err).with_source("(module (func))");

        let labels: Vec<_> = diag.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 8);
        assert_eq!(labels[0].len(), 1);
        assert_eq!(labels[0].label(), Some("error at offset 8"));
    }

    #[test]
    fn test_label_clamped_past_end() {
        let err = WasmError::new(100, "unexpected end of input");
        let diag = WasmErrorDiagnostic::new(&err).with_source("(module");

        let labels: Vec<_> = diag.labels().unwrap().collect();
        assert_eq!(labels[0].offset(), 7);
        assert_eq!(labels[0].len(), 0);
    }
}
