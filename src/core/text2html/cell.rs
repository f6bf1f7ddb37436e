//! Cell parsing and rendering
//!
//! One raw cell string resolves, in order: format shorthand rewriting, the
//! trailing attribute list, the `_text_` heading wrapper, tag and scope
//! defaults for the current section, text rendering, and finally the cell
//! element wrap with its whitelisted attribute subset.

use lazy_static::lazy_static;
use regex::Regex;

use super::context::{AttrMap, CellScope, Section};
use super::markup;
use super::Renderer;

lazy_static! {
    /// `_text_` row-heading wrapper
    static ref HEADING_WRAPPER: Regex = Regex::new(r"^_.+_$").unwrap();
}

/// Default test for the row-heading wrapper
pub fn default_is_row_heading(text: &str) -> bool {
    HEADING_WRAPPER.is_match(text)
}

/// Default strip of the row-heading wrapper
pub fn default_strip_row_heading(text: &str) -> String {
    text.strip_prefix('_')
        .and_then(|inner| inner.strip_suffix('_'))
        .unwrap_or(text)
        .trim()
        .to_string()
}

/// Default whitelist of attributes serialized onto a cell element:
/// `{id, class, data-format, scope, colspan}`, with `data-format` taken
/// from the `format` control attribute
pub fn default_filter_cell_attributes(props: &AttrMap) -> AttrMap {
    let mut attrs = AttrMap::new();
    for key in ["id", "class"] {
        if let Some(value) = props.get(key) {
            attrs.insert(key.to_string(), value.clone());
        }
    }
    if let Some(value) = props.get("format") {
        attrs.insert("data-format".to_string(), value.clone());
    }
    for key in ["scope", "colspan"] {
        if let Some(value) = props.get(key) {
            attrs.insert(key.to_string(), value.clone());
        }
    }
    attrs
}

/// Render one raw cell string into a table-cell element
pub(super) fn render_cell(
    renderer: &Renderer<'_>,
    raw: &str,
    section: Section,
    index: usize,
) -> String {
    let rewritten = markup::rewrite_format_shorthand(raw);
    let (text_part, attr_part) = markup::split_attribute_suffix(&rewritten);

    let mut props = AttrMap::new();
    markup::extract_attributes(&attr_part, &mut props);

    let mut text = text_part.trim().to_string();

    // heading wrapper marks the cell as a th; an explicit tag attribute wins
    if renderer.is_row_heading(&text) {
        text = renderer.strip_row_heading(&text);
        if !props.contains_key("tag") {
            props.insert("tag".to_string(), "th".to_string());
        }
    }

    if !props.contains_key("tag") && section == Section::Head {
        props.insert("tag".to_string(), "th".to_string());
    }

    if !props.contains_key("scope") && props.get("tag").map(String::as_str) == Some("th") {
        match section {
            Section::Body => {
                props.insert("scope".to_string(), "row".to_string());
            }
            Section::Head => {
                props.insert("scope".to_string(), "col".to_string());
            }
            Section::Foot => {}
        }
    }

    let scope = CellScope {
        section,
        index,
        props: &props,
    };
    let html = renderer.render_text(text.trim(), &scope);

    match renderer.options().hooks.render_cell {
        Some(ref hook) => hook(renderer, &html, &scope),
        None => {
            let tag = props.get("tag").cloned().unwrap_or_else(|| "td".to_string());
            let attrs = renderer.filter_cell_attributes(&props);
            markup::h(&tag, Some(&attrs), &html)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_wrapper_detection() {
        assert!(default_is_row_heading("_Label_"));
        assert!(default_is_row_heading("_46465189=703_"));
        assert!(!default_is_row_heading("_Label"));
        assert!(!default_is_row_heading("Label_"));
        assert!(!default_is_row_heading("__"));
    }

    #[test]
    fn test_heading_wrapper_strip() {
        assert_eq!(default_strip_row_heading("_Label_"), "Label");
        assert_eq!(default_strip_row_heading("_ padded _"), "padded");
        // not a wrapper, left untouched apart from trimming
        assert_eq!(default_strip_row_heading("plain"), "plain");
    }

    #[test]
    fn test_default_cell_attribute_whitelist() {
        let mut props = AttrMap::new();
        for (key, value) in [
            ("tag", "th"),
            ("format", "date"),
            ("class", "wide"),
            ("colspan", "2"),
            ("scope", "row"),
            ("onclick", "evil()"),
        ] {
            props.insert(key.to_string(), value.to_string());
        }

        let attrs = default_filter_cell_attributes(&props);
        assert_eq!(
            markup::attributes_to_string(&attrs),
            "class=\"wide\" data-format=\"date\" scope=\"row\" colspan=\"2\""
        );
        assert!(!attrs.contains_key("tag"));
        assert!(!attrs.contains_key("onclick"));
    }
}
