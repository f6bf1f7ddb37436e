//! Metadata block extraction
//!
//! A document may open with a metadata block: `key: value` lines in the
//! first row block. `caption` holds a plain string; `head`, `body` and
//! `foot` hold pipe-separated per-column sequences. Unrecognized keys are
//! carried along as plain strings. A document without a metadata block is
//! a fully anonymous table, not an error.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::SEQUENCE_KEYS;

lazy_static! {
    /// A metadata block opens with a lowercase `key:` line
    static ref METADATA_KEY_LINE: Regex = Regex::new(r"^[a-z-]+:").unwrap();
}

/// Parsed metadata block
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Table caption text
    pub caption: Option<String>,
    /// Column header source strings
    pub head: Option<Vec<String>>,
    /// Per-column template suffixes appended to every data row
    pub body: Option<Vec<String>>,
    /// Column footer source strings
    pub foot: Option<Vec<String>>,
    /// Unrecognized keys, in declaration order
    pub extra: IndexMap<String, String>,
}

/// Extract the metadata block from sanitized content
///
/// Returns `None` when the first line does not look like a `key:`
/// declaration. Only the first row block is consulted; empty lines inside
/// it are skipped, and each line splits on its first `:`.
pub fn extract(
    content: &str,
    split_rows: &dyn Fn(&str) -> Vec<String>,
    split_items: &dyn Fn(&str) -> Vec<String>,
) -> Option<Metadata> {
    if !METADATA_KEY_LINE.is_match(content) {
        return None;
    }

    let block = split_rows(content).into_iter().next()?;
    let mut metadata = Metadata::default();

    for line in block.split('\n').filter(|line| !line.is_empty()) {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();

        if SEQUENCE_KEYS.contains(name) {
            let items: Vec<String> = split_items(value)
                .iter()
                .map(|item| item.trim().to_string())
                .collect();
            match name {
                "head" => metadata.head = Some(items),
                "body" => metadata.body = Some(items),
                "foot" => metadata.foot = Some(items),
                _ => {}
            }
        } else if name == "caption" {
            metadata.caption = Some(value.trim().to_string());
        } else {
            metadata
                .extra
                .insert(name.to_string(), value.trim().to_string());
        }
    }

    Some(metadata)
}
