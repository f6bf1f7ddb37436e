//! Constants for table notation parsing and HTML serialization
//!
//! This module contains the fixed vocabulary of the notation:
//! - Metadata keys whose values are pipe-separated sequences
//! - Attributes allowed through to the `<table>` element

use phf::phf_set;

/// Metadata keys parsed as pipe-separated, per-column sequences.
/// All other keys (including `caption`) hold plain trimmed strings.
pub static SEQUENCE_KEYS: phf::Set<&'static str> = phf_set! {
    "head",
    "body",
    "foot",
};

/// Attributes passed through to the `<table>` element by name.
/// `data-*` and `aria-*` attributes are allowed by prefix instead.
pub static TABLE_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "id",
    "class",
};

/// Formatter looked up when a cell carries no `format` attribute
pub const DEFAULT_FORMAT: &str = "text";
