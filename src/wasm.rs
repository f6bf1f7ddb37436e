//! WASM bindings for tabdown
//!
//! This module provides JavaScript-accessible functions for rendering
//! table notation to HTML.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use std::sync::Arc;

#[cfg(feature = "wasm")]
use crate::core::text2html::{text_to_html_with_options, AttrMap, RenderOptions};
#[cfg(feature = "wasm")]
use crate::features::formatters::FormatterTable;
#[cfg(feature = "wasm")]
use crate::utils::diagnostics::MemorySink;

/// Render options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct TableRenderOptions {
    /// Opaque table identifier
    #[serde(default)]
    pub name: Option<String>,
    /// Attributes passed through to the `<table>` element
    /// (`id`, `class`, `data-*`, `aria-*`)
    #[serde(default)]
    pub attributes: AttrMap,
    /// Register the built-in formatters (`date`, `location`)
    #[serde(default = "default_true")]
    pub builtin_formatters: bool,
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Render result with collected diagnostics
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderOutcome {
    /// The rendered `<table>` HTML (empty string for zero data rows)
    pub output: String,
    /// Whether rendering completed
    pub success: bool,
    /// Diagnostics collected during the render
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render table notation to HTML
///
/// `options` may be `undefined`, `null`, or an object matching
/// [`TableRenderOptions`].
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_table(content: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let wasm_options: TableRenderOptions = if options.is_undefined() || options.is_null() {
        TableRenderOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|err| JsValue::from_str(&err.to_string()))?
    };

    let formatters = if wasm_options.builtin_formatters {
        FormatterTable::with_builtins()
    } else {
        FormatterTable::new()
    };

    let sink = Arc::new(MemorySink::new());
    let mut render_options = RenderOptions::with_formatters(formatters);
    render_options.name = wasm_options.name;
    render_options.attributes = wasm_options.attributes;
    render_options.reporter = sink.clone();

    let output = text_to_html_with_options(content, &render_options);

    let outcome = RenderOutcome {
        output,
        success: true,
        warnings: sink.take().into_iter().map(|d| d.message).collect(),
    };
    serde_wasm_bindgen::to_value(&outcome).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Render table notation to HTML, returning only the markup string
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn render_table_plain(content: &str) -> String {
    crate::render(content)
}
