//! Attribute codec and element wrapping
//!
//! Attributes travel as ordered maps and serialize as `key="value"` pairs
//! in insertion order. Extraction recognizes `key="value"` tokens (keys are
//! lowercase letters and hyphens) without requiring separators between
//! them, and rewrites the bare `=name` format shorthand into a regular
//! `format="name"` token so both share one extraction path.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::TABLE_ATTRIBUTES;

use super::context::AttrMap;

lazy_static! {
    /// One `key="value"` attribute token
    static ref ATTR_TOKEN: Regex = Regex::new(r#"([a-z-]+)="([^"]*)""#).unwrap();
    /// Run of attribute tokens anchored at the end of a cell
    static ref ATTR_SUFFIX: Regex = Regex::new(r#"((?:\s*[a-z-]+="[^"]*")+)\s*$"#).unwrap();
    /// Bare `=name` format shorthand
    static ref FORMAT_SHORTHAND: Regex = Regex::new(r"(^|\s)=([a-z][a-z0-9-]*)").unwrap();
}

/// Serialize an attribute map as `key="value"` pairs, space-joined
pub fn attributes_to_string(attrs: &AttrMap) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap an HTML fragment in an element, omitting the attribute list when empty
pub fn h(tag: &str, attrs: Option<&AttrMap>, html: &str) -> String {
    let attr_str = attrs.map(attributes_to_string).unwrap_or_default();
    if attr_str.is_empty() {
        format!("<{}>{}</{}>", tag, html, tag)
    } else {
        format!("<{} {}>{}</{}>", tag, attr_str, html, tag)
    }
}

/// Rewrite each bare `=name` shorthand token into `format="name"`
pub fn rewrite_format_shorthand(text: &str) -> String {
    FORMAT_SHORTHAND
        .replace_all(text, "${1}format=\"${2}\"")
        .into_owned()
}

/// Split a cell into its text portion and trailing attribute-list portion
///
/// The attribute list must consist solely of `key="value"` tokens anchored
/// at the end of the string; without such a suffix the whole cell is text.
pub fn split_attribute_suffix(text: &str) -> (String, String) {
    match ATTR_SUFFIX.find(text) {
        Some(found) => (
            text[..found.start()].to_string(),
            text[found.start()..].to_string(),
        ),
        None => (text.to_string(), String::new()),
    }
}

/// Extract every `key="value"` token from a fragment into an attribute map
///
/// Duplicate keys merge: the new value is appended space-separated unless
/// it is already a substring of the existing value, so space-separated
/// token lists (e.g. classes) compose without duplication.
pub fn extract_attributes(fragment: &str, props: &mut AttrMap) {
    for caps in ATTR_TOKEN.captures_iter(fragment) {
        merge_attribute(props, &caps[1], &caps[2]);
    }
}

/// Apply the duplicate-key merge rule for one attribute
pub fn merge_attribute(props: &mut AttrMap, key: &str, value: &str) {
    match props.get_mut(key) {
        Some(existing) => {
            if !existing.contains(value) {
                existing.push(' ');
                existing.push_str(value);
            }
        }
        None => {
            props.insert(key.to_string(), value.to_string());
        }
    }
}

/// Keep only attributes valid on the `<table>` element:
/// `id`, `class`, and anything under the `data-` / `aria-` prefixes
pub fn filter_table_attributes(attrs: &AttrMap) -> AttrMap {
    attrs
        .iter()
        .filter(|(key, _)| {
            key.starts_with("data-")
                || key.starts_with("aria-")
                || TABLE_ATTRIBUTES.contains(key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
