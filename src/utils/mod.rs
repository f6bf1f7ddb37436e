//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and reporting sinks
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    default_sink, format_diagnostics, Diagnostic, DiagnosticLevel, DiagnosticSink, MemorySink,
    NoopSink,
};
pub use error::{FormatError, FormatResult};

#[cfg(not(target_arch = "wasm32"))]
pub use diagnostics::StderrSink;
