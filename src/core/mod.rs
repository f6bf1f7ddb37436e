//! Core conversion modules
//!
//! This module contains the rendering engine:
//! - `text2html`: table notation to semantic HTML renderer

pub mod text2html;

// Re-export main types and functions
pub use text2html::{
    text_to_html, text_to_html_with_options, AttrMap, CellScope, Metadata, RenderHooks,
    RenderOptions, Renderer, Section,
};
