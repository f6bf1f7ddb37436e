//! Text to HTML table conversion module
//!
//! This module turns the compact line-oriented table notation into a
//! semantic `<table>` string.
//!
//! # Module Structure
//!
//! - `context`: Render options, hook set, and section/cell context
//! - `markup`: Attribute codec and element wrapping
//! - `metadata`: Leading `key: value` block extraction
//! - `rows`: Row block splitting and body-template merging
//! - `cell`: Per-cell attribute and heading resolution
//! - `text`: Inline text, link and formatter rendering
//!
//! # Example
//!
//! ```rust
//! use tabdown::core::text2html::{text_to_html_with_options, RenderOptions};
//! use tabdown::formatters::FormatterTable;
//!
//! let options = RenderOptions::with_formatters(FormatterTable::with_builtins());
//! let html = text_to_html_with_options("head: Name | Age\n\nAlice\n30", &options);
//! assert!(html.contains("<th scope=\"col\">Name</th>"));
//! assert!(html.contains("<td>Alice</td>"));
//! ```

// Submodules
pub mod cell;
pub mod context;
pub mod markup;
pub mod metadata;
pub mod rows;
pub mod text;


// Re-export main types for convenience
pub use context::{AttrMap, CellScope, RenderHooks, RenderOptions, Section};
pub use metadata::Metadata;

use regex::Regex;

use crate::features::anchors::{self, ANCHOR_PATTERN};
use crate::utils::diagnostics::Diagnostic;

/// Render a document with default options
pub fn text_to_html(content: &str) -> String {
    text_to_html_with_options(content, &RenderOptions::default())
}

/// Render a document with custom options
pub fn text_to_html_with_options(content: &str, options: &RenderOptions) -> String {
    Renderer::new(options).render(content)
}

/// The resolved rendering pipeline
///
/// Holds the active option set and dispatches every stage through its
/// override when one is configured, falling back to the built-in stage
/// otherwise. Hooks receive the renderer itself so they can re-enter the
/// pipeline (the link stage calling back into text rendering, a container
/// stage re-wrapping the table, and so on).
pub struct Renderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// The active option set
    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Run the full pipeline over a raw document
    pub fn render(&self, content: &str) -> String {
        let sanitized = self.sanitize(content.trim());
        if sanitized.is_empty() {
            return String::new();
        }

        let metadata = metadata::extract(
            &sanitized,
            &|content| self.split_rows(content),
            &|value| self.split_items(value),
        );
        let offset = usize::from(metadata.is_some());
        let metadata = metadata.unwrap_or_default();

        let template: &[String] = metadata.body.as_deref().unwrap_or(&[]);
        let data_rows =
            rows::collect_rows(&sanitized, template, offset, &|content| {
                self.split_rows(content)
            });

        // a table with zero data rows is empty, not malformed
        if data_rows.is_empty() {
            return String::new();
        }

        let thead = match metadata.head {
            Some(ref cells) => self.render_section(vec![cells.clone()], Section::Head),
            None => String::new(),
        };

        let tbody = self.render_section(data_rows, Section::Body);

        let tfoot = match metadata.foot {
            Some(ref cells) => self.render_section(vec![cells.clone()], Section::Foot),
            None => String::new(),
        };

        let caption = match metadata.caption {
            Some(ref text) => self.render_caption(text),
            None => String::new(),
        };

        let inner = format!("\n{}\n{}\n{}\n{}\n", caption, thead, tbody, tfoot);
        let table = self.render_table(&inner);
        self.render_container(&table)
    }

    // =========================================================================
    // Stage dispatch
    // =========================================================================

    fn sanitize(&self, content: &str) -> String {
        match self.options.hooks.sanitize_content {
            Some(ref hook) => hook(content),
            None => content.to_string(),
        }
    }

    /// Split a document into row blocks
    pub fn split_rows(&self, content: &str) -> Vec<String> {
        match self.options.hooks.split_rows {
            Some(ref hook) => hook(content),
            None => rows::split_rows(content),
        }
    }

    /// Split a sequence-typed metadata value into items
    pub fn split_items(&self, value: &str) -> Vec<String> {
        match self.options.hooks.split_items {
            Some(ref hook) => hook(value),
            None => rows::split_items(value),
        }
    }

    /// Derive an anchor slug from link text
    pub fn slugify(&self, text: &str) -> String {
        match self.options.hooks.slugify {
            Some(ref hook) => hook(text),
            None => anchors::slugify(text),
        }
    }

    /// The pattern recognizing a trailing anchor token
    pub fn anchor_pattern(&self) -> &Regex {
        match self.options.anchor_pattern {
            Some(ref pattern) => pattern,
            None => &ANCHOR_PATTERN,
        }
    }

    /// Test for the row-heading wrapper
    pub fn is_row_heading(&self, text: &str) -> bool {
        match self.options.hooks.is_row_heading {
            Some(ref hook) => hook(text),
            None => cell::default_is_row_heading(text),
        }
    }

    /// Strip the row-heading wrapper
    pub fn strip_row_heading(&self, text: &str) -> String {
        match self.options.hooks.strip_row_heading {
            Some(ref hook) => hook(text),
            None => cell::default_strip_row_heading(text),
        }
    }

    /// Filter the attributes serialized onto a cell element
    pub fn filter_cell_attributes(&self, props: &AttrMap) -> AttrMap {
        match self.options.hooks.filter_cell_attributes {
            Some(ref hook) => hook(props),
            None => cell::default_filter_cell_attributes(props),
        }
    }

    /// Render cell text to inline HTML
    pub fn render_text(&self, text: &str, scope: &CellScope<'_>) -> String {
        match self.options.hooks.render_text {
            Some(ref hook) => hook(self, text, scope),
            None => text::render_text(self, text, scope),
        }
    }

    /// Render cell text carrying a trailing anchor as a link
    pub fn render_link(&self, text: &str, scope: &CellScope<'_>) -> String {
        match self.options.hooks.render_link {
            Some(ref hook) => hook(self, text, scope),
            None => text::render_link(self, text, scope),
        }
    }

    /// Parse and render one raw cell
    pub fn render_cell(&self, raw: &str, section: Section, index: usize) -> String {
        cell::render_cell(self, raw, section, index)
    }

    /// Render one row of raw cells
    pub fn render_row(&self, cells: &[String], section: Section) -> String {
        let html = cells
            .iter()
            .enumerate()
            .map(|(index, raw)| self.render_cell(raw, section, index))
            .collect::<Vec<_>>()
            .join("\n");

        match self.options.hooks.render_row {
            Some(ref hook) => hook(self, &html, section),
            None => markup::h("tr", None, &html),
        }
    }

    /// Render a sequence of rows
    pub fn render_rows(&self, rows: &[Vec<String>], section: Section) -> String {
        rows.iter()
            .map(|cells| self.render_row(cells, section))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render one section: row-sequence transform, rows, section wrapper.
    /// Head and foot run through the same path as the body, as one-row
    /// sequences.
    pub fn render_section(&self, rows: Vec<Vec<String>>, section: Section) -> String {
        let transform = match section {
            Section::Head => &self.options.hooks.will_render_header,
            Section::Body => &self.options.hooks.will_render_body,
            Section::Foot => &self.options.hooks.will_render_footer,
        };
        let rows = match transform {
            Some(hook) => hook(self, rows, section),
            None => rows,
        };

        let html = self.render_rows(&rows, section);

        let wrapper = match section {
            Section::Head => &self.options.hooks.render_header,
            Section::Body => &self.options.hooks.render_body,
            Section::Foot => &self.options.hooks.render_footer,
        };
        match wrapper {
            Some(hook) => hook(self, &html),
            None => markup::h(section.element(), None, &html),
        }
    }

    /// Render the caption element
    pub fn render_caption(&self, text: &str) -> String {
        match self.options.hooks.render_caption {
            Some(ref hook) => hook(self, text),
            None => markup::h("caption", None, text),
        }
    }

    /// Wrap the assembled sections in the `<table>` element
    pub fn render_table(&self, html: &str) -> String {
        match self.options.hooks.render_table {
            Some(ref hook) => hook(self, html),
            None => {
                let attrs = markup::filter_table_attributes(&self.options.attributes);
                markup::h("table", Some(&attrs), html)
            }
        }
    }

    /// Outermost wrapper around the finished table markup
    pub fn render_container(&self, html: &str) -> String {
        match self.options.hooks.render_container {
            Some(ref hook) => hook(self, html),
            None => html.to_string(),
        }
    }

    /// Report a diagnostic through the configured sink
    pub fn report(&self, diagnostic: &Diagnostic) {
        self.options.reporter.report(diagnostic);
    }
}
