//! # tabdown
//!
//! Compact line-oriented table notation rendered to semantic HTML.
//!
//! ## Features
//!
//! - **Terse Notation**: blank-line separated rows, one line per cell
//! - **Metadata Header**: `caption`, `head`, `body` and `foot` declarations
//! - **Column Templates**: declare a formatter once, apply it to a column
//! - **Inline Attributes**: `key="value"` attributes and `_heading_` markers
//! - **Link Detection**: trailing `#anchor` tokens with automatic slugs
//! - **Formatters**: pluggable named text transforms with error isolation
//! - **Hooks**: every pipeline stage is independently overridable
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Basic Table
//!
//! ```rust
//! use tabdown::render;
//!
//! let html = render("head: Name | Age\n\nAlice\n30");
//! assert!(html.contains("<th scope=\"col\">Name</th>"));
//! assert!(html.contains("<td>Alice</td>"));
//! ```
//!
//! ### Formatters and Column Templates
//!
//! ```rust
//! use tabdown::{render_with_options, FormatterTable, RenderOptions};
//!
//! let options = RenderOptions::with_formatters(FormatterTable::with_builtins());
//! let html = render_with_options(
//!     "head: Event | Date\nbody: | =date\n\nLaunch\n1999-11-22",
//!     &options,
//! );
//! assert!(html.contains("Monday, November 22, 1999"));
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static vocabulary and constants
pub mod data;

/// Feature modules - anchors and formatters
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the rendering engine
pub use core::text2html;
pub use core::text2html::{
    text_to_html, text_to_html_with_options, AttrMap, CellScope, Metadata, RenderHooks,
    RenderOptions, Renderer, Section,
};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::anchors;
pub use features::formatters;
pub use features::formatters::{Formatter, FormatterTable};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, MemorySink, NoopSink};
pub use utils::error::{FormatError, FormatResult};

/// Render a table document with default options
///
/// # Arguments
/// * `content` - table notation text
///
/// # Returns
/// The `<table>` HTML string, or an empty string for zero data rows
pub fn render(content: &str) -> String {
    text_to_html(content)
}

/// Render a table document with custom options
///
/// # Arguments
/// * `content` - table notation text
/// * `options` - render options (formatters, attributes, hooks)
///
/// # Returns
/// The `<table>` HTML string, or an empty string for zero data rows
pub fn render_with_options(content: &str, options: &RenderOptions) -> String {
    text_to_html_with_options(content, options)
}
