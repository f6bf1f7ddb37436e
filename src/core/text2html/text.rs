//! Cell text rendering
//!
//! Text with a trailing anchor token renders as a link whose body is the
//! remaining text rendered recursively. Header cells otherwise pass
//! through untouched. Body and footer cells run through the formatter
//! selected by the cell's `format` attribute; an unregistered name falls
//! back to identity, and a formatter failure surfaces its message in place
//! of the cell content without disturbing any other cell.

use crate::data::constants::DEFAULT_FORMAT;
use crate::features::anchors;
use crate::utils::diagnostics::Diagnostic;

use super::context::{CellScope, Section};
use super::Renderer;

/// Default text renderer
pub(super) fn render_text(renderer: &Renderer<'_>, text: &str, scope: &CellScope<'_>) -> String {
    if renderer.anchor_pattern().is_match(text) {
        return renderer.render_link(text, scope);
    }

    if scope.section == Section::Head {
        return text.to_string();
    }

    let format = scope
        .props
        .get("format")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORMAT);

    match renderer.options().formatters.get(format) {
        Some(formatter) => match formatter(text) {
            Ok(html) => html,
            Err(err) => {
                renderer.report(&Diagnostic::formatter_failure(format, err.message(), text));
                err.message().to_string()
            }
        },
        None => text.to_string(),
    }
}

/// Default link renderer
///
/// Splits the trailing anchor off, renders the remaining text as the link
/// body, and targets the explicit fragment when one was given or the
/// slugified body text for a bare `#`.
pub(super) fn render_link(renderer: &Renderer<'_>, text: &str, scope: &CellScope<'_>) -> String {
    match anchors::split_anchor(text, renderer.anchor_pattern()) {
        Some((body, anchor)) => {
            let href = if anchor == "#" {
                format!("#{}", renderer.slugify(&body))
            } else {
                anchor
            };
            format!(
                "<a href=\"{}\">{}</a>",
                href,
                renderer.render_text(&body, scope)
            )
        }
        // no match means no anchor; render nothing fancier than the text
        None => text.to_string(),
    }
}
