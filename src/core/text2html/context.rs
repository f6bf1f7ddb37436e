//! Core options and structures for text to HTML table rendering
//!
//! This module contains the render options, the hook set, and the
//! per-section/per-cell context passed through the pipeline.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::features::formatters::FormatterTable;
use crate::utils::diagnostics::{default_sink, DiagnosticSink};

use super::Renderer;

/// Ordered attribute mapping; serialization follows insertion order
pub type AttrMap = IndexMap<String, String>;

/// Table section a cell is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    Head,
    #[default]
    Body,
    Foot,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Head => "head",
            Section::Body => "body",
            Section::Foot => "foot",
        }
    }

    /// HTML element wrapping this section's rows
    pub fn element(&self) -> &'static str {
        match self {
            Section::Head => "thead",
            Section::Body => "tbody",
            Section::Foot => "tfoot",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Context for one cell being rendered
#[derive(Debug)]
pub struct CellScope<'a> {
    /// Section the cell belongs to
    pub section: Section,
    /// Column index within the row
    pub index: usize,
    /// Parsed cell attributes (including control keys like `tag`)
    pub props: &'a AttrMap,
}

// =============================================================================
// Hook signatures
// =============================================================================

/// Pre-processes raw text before any parsing
pub type SanitizeHook = Box<dyn Fn(&str) -> String + Send + Sync>;
/// Splits text into row blocks, or a metadata value into items
pub type SplitHook = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;
/// Derives an anchor slug from link text
pub type SlugHook = Box<dyn Fn(&str) -> String + Send + Sync>;
/// Detects the row-heading wrapper on cell text
pub type HeadingTestHook = Box<dyn Fn(&str) -> bool + Send + Sync>;
/// Strips the row-heading wrapper from cell text
pub type HeadingStripHook = Box<dyn Fn(&str) -> String + Send + Sync>;
/// Filters/transforms the attributes serialized onto a cell element
pub type AttrFilterHook = Box<dyn Fn(&AttrMap) -> AttrMap + Send + Sync>;
/// Cell-stage renderer: receives text or inner HTML plus the cell scope
pub type CellStageHook =
    Box<dyn Fn(&Renderer<'_>, &str, &CellScope<'_>) -> String + Send + Sync>;
/// Row-stage renderer: receives joined cell HTML plus the section
pub type RowStageHook = Box<dyn Fn(&Renderer<'_>, &str, Section) -> String + Send + Sync>;
/// Table-stage renderer: receives a completed HTML fragment
pub type TableStageHook = Box<dyn Fn(&Renderer<'_>, &str) -> String + Send + Sync>;
/// Pre-render transform of a section's row sequence
pub type RowsTransformHook =
    Box<dyn Fn(&Renderer<'_>, Vec<Vec<String>>, Section) -> Vec<Vec<String>> + Send + Sync>;

/// Override points for every pipeline stage
///
/// Every field defaults to `None`, meaning the documented built-in stage
/// runs. Overrides receive the active [`Renderer`] so they can re-enter
/// the pipeline (e.g. a link override calling back into text rendering).
#[derive(Default)]
pub struct RenderHooks {
    pub sanitize_content: Option<SanitizeHook>,
    pub split_rows: Option<SplitHook>,
    pub split_items: Option<SplitHook>,
    pub slugify: Option<SlugHook>,
    pub is_row_heading: Option<HeadingTestHook>,
    pub strip_row_heading: Option<HeadingStripHook>,
    pub filter_cell_attributes: Option<AttrFilterHook>,
    pub render_link: Option<CellStageHook>,
    pub render_text: Option<CellStageHook>,
    pub render_cell: Option<CellStageHook>,
    pub render_row: Option<RowStageHook>,
    pub render_header: Option<TableStageHook>,
    pub render_body: Option<TableStageHook>,
    pub render_footer: Option<TableStageHook>,
    pub render_caption: Option<TableStageHook>,
    pub render_table: Option<TableStageHook>,
    pub render_container: Option<TableStageHook>,
    pub will_render_header: Option<RowsTransformHook>,
    pub will_render_body: Option<RowsTransformHook>,
    pub will_render_footer: Option<RowsTransformHook>,
}

/// Options for rendering a table
pub struct RenderOptions {
    /// Opaque table identifier; attached to the render, not interpreted
    pub name: Option<String>,

    /// Attributes passed through to the `<table>` element.
    /// Only `id`, `class`, `data-*` and `aria-*` keys survive the filter.
    pub attributes: AttrMap,

    /// Formatters available to `format` attributes.
    /// Default: empty (every lookup falls back to identity)
    pub formatters: FormatterTable,

    /// Pattern recognizing a trailing anchor token.
    /// Default: `#([a-z-]+)?$`
    pub anchor_pattern: Option<Regex>,

    /// Where render diagnostics go.
    /// Default: stderr on native targets, discarded on wasm
    pub reporter: Arc<dyn DiagnosticSink>,

    /// Stage overrides, merged over the built-in pipeline
    pub hooks: RenderHooks,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            name: None,
            attributes: AttrMap::new(),
            formatters: FormatterTable::new(),
            anchor_pattern: None,
            reporter: default_sink(),
            hooks: RenderHooks::default(),
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options around a caller-supplied formatter table
    pub fn with_formatters(formatters: FormatterTable) -> Self {
        Self {
            formatters,
            ..Self::default()
        }
    }
}
