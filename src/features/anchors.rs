//! Anchor and slug handling
//!
//! Cell text may end in an anchor token: `#custom` links to an explicit
//! fragment, a bare trailing `#` asks for a fragment derived from the text
//! itself. This module recognizes the token and derives the slug.
//!
//! ## Example
//!
//! ```rust
//! use tabdown::anchors::{slugify, split_anchor, ANCHOR_PATTERN};
//!
//! assert_eq!(slugify("Rome (Italy)"), "rome-");
//! let (text, anchor) = split_anchor("Paris#custom", &ANCHOR_PATTERN).unwrap();
//! assert_eq!(text, "Paris");
//! assert_eq!(anchor, "#custom");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing anchor token: `#` plus an optional explicit fragment name
    pub static ref ANCHOR_PATTERN: Regex = Regex::new(r"#([a-z-]+)?$").unwrap();
    static ref PARENTHESIZED: Regex = Regex::new(r"\(.*\)").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Derive a URL-fragment slug from link text
///
/// Lowercases, drops parenthesized asides and apostrophes, and collapses
/// whitespace runs to single hyphens.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_parens = PARENTHESIZED.replace_all(&lowered, "");
    let no_apostrophes = no_parens.replace('\'', "");
    WHITESPACE_RUN
        .replace_all(&no_apostrophes, "-")
        .into_owned()
}

/// Split a trailing anchor token off the cell text
///
/// Returns `(text_without_anchor, anchor_token)`, or `None` when the
/// pattern does not match anywhere - absence of a match means absence of
/// an anchor, never a failure.
pub fn split_anchor(text: &str, pattern: &Regex) -> Option<(String, String)> {
    let found = pattern.find(text)?;
    let anchor = found.as_str().to_string();
    let mut remaining = String::with_capacity(text.len() - anchor.len());
    remaining.push_str(&text[..found.start()]);
    remaining.push_str(&text[found.end()..]);
    Some((remaining, anchor))
}
