//! Feature modules - pieces layered on top of the core pipeline
//!
//! This module contains the pluggable vocabulary of the renderer:
//! - Anchor detection and slug derivation
//! - The formatter registry and built-in formatters

pub mod anchors;
pub mod formatters;

// Re-export commonly used types
pub use anchors::{slugify, split_anchor, ANCHOR_PATTERN};
pub use formatters::{format_date, format_location, Formatter, FormatterTable};
