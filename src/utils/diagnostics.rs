//! Render diagnostics and reporting sinks
//!
//! Rendering never fails: recoverable problems (a formatter rejecting its
//! input) are surfaced inline in the output and reported as diagnostics.
//! The `DiagnosticSink` trait decides where those reports go:
//!
//! - `StderrSink`: writes to stderr (native default)
//! - `MemorySink`: collects in memory (testing, WASM)
//! - `NoopSink`: discards everything
//!
//! ## Example
//!
//! ```rust
//! use tabdown::diagnostics::{Diagnostic, DiagnosticLevel, MemorySink, DiagnosticSink};
//!
//! let sink = MemorySink::new();
//! sink.report(&Diagnostic::new(DiagnosticLevel::Warning, "something odd"));
//! assert_eq!(sink.take().len(), 1);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output is usable but may not be what the author intended
    Warning,
    /// Error - a cell could not be rendered as requested
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic produced during rendering
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Name of the formatter involved, if any
    pub formatter: Option<String>,
    /// The offending cell text, if any
    pub source_text: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            formatter: None,
            source_text: None,
        }
    }

    /// Diagnostic for a formatter that rejected its input
    pub fn formatter_failure(
        format: impl Into<String>,
        message: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let format = format.into();
        let message = message.into();
        let text = text.into();
        Self {
            level: DiagnosticLevel::Error,
            message: format!(
                "\"{}\" formatter error \"{}\" for text \"{}\"",
                format, message, text
            ),
            formatter: Some(format),
            source_text: Some(text),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Format a batch of diagnostics for display
pub fn format_diagnostics(diagnostics: &[Diagnostic], use_color: bool) -> String {
    let mut output = String::new();

    for diag in diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("{}\n", diag));
        }
    }

    output
}

/// Trait for receiving diagnostics during a render
///
/// Implementations:
/// - `StderrSink`: writes to stderr (native default)
/// - `MemorySink`: in-memory collection (testing, WASM with a results panel)
/// - `NoopSink`: discards all reports (WASM fallback)
pub trait DiagnosticSink: Send + Sync {
    /// Receive one diagnostic
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink writing colored reports to stderr
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

#[cfg(not(target_arch = "wasm32"))]
impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprint!("{}", format_diagnostics(std::slice::from_ref(diagnostic), true));
    }
}

/// Sink collecting diagnostics in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected diagnostics
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain and return all collected diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }

    /// Snapshot of all collected messages
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.iter().map(|d| d.message.clone()).collect())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic.clone());
        }
    }
}

/// Sink that discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NoopSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Default sink for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(StderrSink::new())
}

#[cfg(target_arch = "wasm32")]
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(NoopSink::new())
}
