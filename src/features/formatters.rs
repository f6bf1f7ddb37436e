//! Cell formatter registry
//!
//! Formatters are named text transforms applied to body and footer cells
//! selected by a cell's `format` attribute (or the `=name` shorthand). The
//! registry is supplied by the caller; two built-ins cover the common cases:
//!
//! - `date`: ISO `YYYY-MM-DD` input rendered as a full human-readable date
//! - `location`: `City, Country` values linked to an OpenStreetMap query
//!
//! ## Example
//!
//! ```rust
//! use tabdown::formatters::FormatterTable;
//!
//! let mut table = FormatterTable::with_builtins();
//! table.register("shout", |text| Ok(text.to_uppercase()));
//! assert!(table.contains("date"));
//! assert!(table.contains("shout"));
//! ```

use chrono::NaiveDate;
use fxhash::FxHashMap;

use crate::utils::error::{FormatError, FormatResult};

/// A named cell text transform
pub type Formatter = Box<dyn Fn(&str) -> FormatResult<String> + Send + Sync>;

/// Registry of formatters, keyed by the name used in `format` attributes
#[derive(Default)]
pub struct FormatterTable {
    entries: FxHashMap<String, Formatter>,
}

impl FormatterTable {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in formatters
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.register("date", format_date);
        table.register("location", format_location);
        table
    }

    /// Register a formatter under a name, replacing any previous entry
    pub fn register<F>(&mut self, name: impl Into<String>, formatter: F)
    where
        F: Fn(&str) -> FormatResult<String> + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(formatter));
    }

    /// Look up a formatter by name
    pub fn get(&self, name: &str) -> Option<&Formatter> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for FormatterTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("FormatterTable")
            .field("formatters", &names)
            .finish()
    }
}

/// Built-in `date` formatter: `2004-02-16` becomes `Monday, February 16, 2004`
pub fn format_date(text: &str) -> FormatResult<String> {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| FormatError::invalid(format!("unrecognized date \"{}\"", trimmed)))?;
    Ok(date.format("%A, %B %-d, %Y").to_string())
}

/// Built-in `location` formatter: comma-separated places link to a map query
pub fn format_location(text: &str) -> FormatResult<String> {
    if text.contains(',') {
        Ok(format!(
            "<a href=\"https://www.openstreetmap.org/?query={place}\" target=\"_blank\" \
             rel=\"noreferrer\" title=\"Show {place} on map\">{place}</a>",
            place = text
        ))
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("1999-11-22").unwrap(),
            "Monday, November 22, 1999"
        );
        assert_eq!(
            format_date("2004-02-16").unwrap(),
            "Monday, February 16, 2004"
        );
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        let err = format_date("not-a-date").unwrap_err();
        assert!(err.message().contains("not-a-date"));
    }

    #[test]
    fn test_format_location_links_comma_values() {
        let html = format_location("Rome, Italy").unwrap();
        assert!(html.contains("openstreetmap.org/?query=Rome, Italy"));
        assert!(html.contains(">Rome, Italy</a>"));
    }

    #[test]
    fn test_format_location_passthrough() {
        assert_eq!(format_location("Asgard").unwrap(), "Asgard");
    }

    #[test]
    fn test_register_and_lookup() {
        let mut table = FormatterTable::new();
        assert!(table.is_empty());

        table.register("shout", |text| Ok(text.to_uppercase()));
        assert_eq!(table.len(), 1);

        let formatter = table.get("shout").unwrap();
        assert_eq!(formatter("hi").unwrap(), "HI");
        assert!(table.get("whisper").is_none());
    }
}
