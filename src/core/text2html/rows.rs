//! Row block splitting
//!
//! The document splits into row blocks on blank lines; each block holds one
//! line per cell. Data rows inherit the metadata body template: the
//! template entry for column *j*, when present and non-empty, is appended
//! space-joined to every row's cell *j*. This is how a formatter declared
//! once in the header reaches every row of a column.

/// Default row separator: the blank-line boundary
pub fn split_rows(content: &str) -> Vec<String> {
    content.split("\n\n").map(str::to_string).collect()
}

/// Default metadata sequence separator: pipe-delimited items
pub fn split_items(value: &str) -> Vec<String> {
    value.split('|').map(str::to_string).collect()
}

/// Collect data rows, skipping `offset` leading blocks and merging the
/// body template into each row
pub fn collect_rows(
    content: &str,
    template: &[String],
    offset: usize,
    split_rows_fn: &dyn Fn(&str) -> Vec<String>,
) -> Vec<Vec<String>> {
    split_rows_fn(content)
        .into_iter()
        .skip(offset)
        .map(|block| {
            block
                .split('\n')
                .enumerate()
                .map(|(index, cell)| match template.get(index) {
                    Some(suffix) if !suffix.is_empty() => format!("{} {}", cell, suffix),
                    _ => cell.to_string(),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows_on_blank_lines() {
        assert_eq!(split_rows("a\nb\n\nc"), vec!["a\nb", "c"]);
        assert_eq!(split_rows("a"), vec!["a"]);
    }

    #[test]
    fn test_collect_rows_offset() {
        let rows = collect_rows("caption: C\n\nA\n1\n\nB\n2", &[], 1, &split_rows);
        assert_eq!(rows, vec![vec!["A", "1"], vec!["B", "2"]]);

        let rows = collect_rows("A\n1", &[], 0, &split_rows);
        assert_eq!(rows, vec![vec!["A", "1"]]);
    }

    #[test]
    fn test_collect_rows_applies_template() {
        let template = vec!["".to_string(), "=date".to_string()];
        let rows = collect_rows("A\n1999-11-22\n\nB\n2004-02-16", &template, 0, &split_rows);
        assert_eq!(
            rows,
            vec![
                vec!["A".to_string(), "1999-11-22 =date".to_string()],
                vec!["B".to_string(), "2004-02-16 =date".to_string()],
            ]
        );
    }

    #[test]
    fn test_collect_rows_template_shorter_than_row() {
        let template = vec!["=x".to_string()];
        let rows = collect_rows("a\nb\nc", &template, 0, &split_rows);
        assert_eq!(rows, vec![vec!["a =x", "b", "c"]]);
    }

    #[test]
    fn test_metadata_only_yields_no_rows() {
        let rows = collect_rows("caption: C", &[], 1, &split_rows);
        assert!(rows.is_empty());
    }
}
