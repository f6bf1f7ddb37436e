//! Integration tests for Tabdown full table rendering

use std::sync::Arc;

use pretty_assertions::assert_eq;

use tabdown::{
    render, render_with_options, FormatError, FormatterTable, MemorySink, RenderOptions,
};

// ============================================================================
// Metadata Handling
// ============================================================================

mod metadata {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_key_line_means_no_metadata() {
        // every block is a data row when no metadata block opens the document
        let html = render("Alice\n30\n\nBob\n41");
        let tbody_start = html.find("<tbody>").unwrap();
        assert!(html[tbody_start..].contains("<td>Alice</td>"));
        assert!(html[tbody_start..].contains("<td>Bob</td>"));
        assert!(!html.contains("<thead>"));
        assert!(!html.contains("<tfoot>"));
        assert!(!html.contains("<caption>"));
    }

    #[test]
    fn test_metadata_block_offsets_data_rows() {
        let html = render("caption: People\nhead: Name | Age\n\nAlice\n30");
        assert!(html.contains("<caption>People</caption>"));
        // the metadata block itself never reaches the body
        assert!(!html.contains("<td>caption"));
        assert!(!html.contains("People</td>"));
    }

    #[test]
    fn test_head_sequence_order() {
        let html = render("head: A | B | C\n\nx\ny\nz");
        let a = html.find("<th scope=\"col\">A</th>").unwrap();
        let b = html.find("<th scope=\"col\">B</th>").unwrap();
        let c = html.find("<th scope=\"col\">C</th>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_caption_head_body_foot_order() {
        let html = render("caption: C\nhead: H\nfoot: F\n\nx");
        let caption = html.find("<caption>").unwrap();
        let thead = html.find("<thead>").unwrap();
        let tbody = html.find("<tbody>").unwrap();
        let tfoot = html.find("<tfoot>").unwrap();
        assert!(caption < thead && thead < tbody && tbody < tfoot);
    }

    #[test]
    fn test_zero_data_rows_render_empty() {
        assert_eq!(render(""), "");
        assert_eq!(render("caption: Lonely\nhead: A | B"), "");
    }
}

// ============================================================================
// Heading Shorthand
// ============================================================================

mod headings {
    use super::*;

    #[test]
    fn test_body_heading_gets_row_scope() {
        let html = render("_Label_\nvalue");
        assert!(html.contains("<th scope=\"row\">Label</th>"));
    }

    #[test]
    fn test_head_heading_keeps_col_scope() {
        // the wrapper marks a th in both contexts; head keeps col scope
        let html = render("head: _Label_\n\nvalue");
        assert!(html.contains("<th scope=\"col\">Label</th>"));
    }

    #[test]
    fn test_underscores_inside_text_are_not_markers() {
        let html = render("snake_case_name\nvalue");
        assert!(html.contains("<td>snake_case_name</td>"));
    }
}

// ============================================================================
// Formatters
// ============================================================================

mod formatters {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_template_applies_column_format() {
        let options = RenderOptions::with_formatters(FormatterTable::with_builtins());
        let html = render_with_options(
            "head: Event | Date\nbody: | =date\n\nLaunch\n1999-11-22\n\nLanding\n2004-02-16",
            &options,
        );

        assert!(html.contains("<td data-format=\"date\">Monday, November 22, 1999</td>"));
        assert!(html.contains("<td data-format=\"date\">Monday, February 16, 2004</td>"));
        // the shorthand itself never appears in the output
        assert!(!html.contains("=date"));
    }

    #[test]
    fn test_failing_formatter_is_isolated_to_its_cell() {
        let sink = Arc::new(MemorySink::new());
        let mut options = RenderOptions::default();
        options.reporter = sink.clone();
        options.formatters.register("strict", |text| {
            if text == "bad" {
                Err(FormatError::invalid("rejected"))
            } else {
                Ok(text.to_uppercase())
            }
        });

        let html = render_with_options("ok =strict\nbad =strict\nalso-ok =strict", &options);

        assert!(html.contains(">OK</td>"));
        assert!(html.contains(">rejected</td>"));
        assert!(html.contains(">ALSO-OK</td>"));

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "\"strict\" formatter error \"rejected\" for text \"bad\""
        );
    }

    #[test]
    fn test_headers_are_never_formatted() {
        let mut options = RenderOptions::default();
        options
            .formatters
            .register("text", |text: &str| Ok(format!("formatted:{}", text)));

        let html = render_with_options("head: Name\n\nAlice", &options);
        assert!(html.contains("<th scope=\"col\">Name</th>"));
        assert!(html.contains("<td>formatted:Alice</td>"));
    }

    #[test]
    fn test_location_formatter_end_to_end() {
        let options = RenderOptions::with_formatters(FormatterTable::with_builtins());
        let html = render_with_options("body: =location\n\nRome, Italy\n\nAsgard", &options);

        assert!(html.contains("openstreetmap.org/?query=Rome, Italy"));
        assert!(html.contains("<td data-format=\"location\">Asgard</td>"));
    }
}

// ============================================================================
// Links and Anchors
// ============================================================================

mod links {
    use super::*;

    #[test]
    fn test_auto_slug_anchor() {
        let html = render("Paris#\nvalue");
        assert!(html.contains("<a href=\"#paris\">Paris</a>"));
    }

    #[test]
    fn test_explicit_anchor() {
        let html = render("Paris#custom\nvalue");
        assert!(html.contains("<a href=\"#custom\">Paris</a>"));
    }

    #[test]
    fn test_slug_drops_asides_and_apostrophes() {
        let html = render("King's Landing (fictional)#\nvalue");
        assert!(html.contains("href=\"#kings-landing-\""));
    }
}

// ============================================================================
// Whole-table structure
// ============================================================================

mod structure {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_shape() {
        let html = render("head: Name | Age\n\nAlice\n30");

        let thead = html.find("<thead>").unwrap();
        let name = html.find("<th scope=\"col\">Name</th>").unwrap();
        let age = html.find("<th scope=\"col\">Age</th>").unwrap();
        let tbody = html.find("<tbody>").unwrap();
        let tr = html[tbody..].find("<tr>").map(|i| i + tbody).unwrap();
        let alice = html.find("<td>Alice</td>").unwrap();
        let thirty = html.find("<td>30</td>").unwrap();

        assert!(thead < name && name < age);
        assert!(age < tbody && tbody < tr);
        assert!(tr < alice && alice < thirty);
        assert_eq!(html.matches("<thead>").count(), 1);
        assert_eq!(html.matches("<tbody>").count(), 1);
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut options = RenderOptions::default();
        for (key, value) in [("id", "t"), ("class", "zebra"), ("data-kind", "demo")] {
            options
                .attributes
                .insert(key.to_string(), value.to_string());
        }

        let content = "head: A | B\n\n1\n2";
        let first = render_with_options(content, &options);
        let second = render_with_options(content, &options);
        assert_eq!(first, second);
        assert!(first.contains("<table id=\"t\" class=\"zebra\" data-kind=\"demo\">"));
    }

    #[test]
    fn test_full_demo_document() {
        let options = RenderOptions::with_formatters(FormatterTable::with_builtins());
        let html = render_with_options(
            "caption: TVA Timeline Disruptions\n\
             head: Event | Date | Location\n\
             body: | =date | =location\n\
             \n\
             _46465189=703_\n\
             2301-04-23\n\
             Vormir\n\
             \n\
             _46462044=066_\n\
             1551-10-25\n\
             Thorton, USA",
            &options,
        );

        assert!(html.contains("<caption>TVA Timeline Disruptions</caption>"));
        // event ids keep their digits; the underscore wrapper marks them as row headings
        assert!(html.contains("<th scope=\"row\">46465189=703</th>"));
        assert!(html.contains("Thursday, October 25, 1551"));
        assert!(html.contains("openstreetmap.org/?query=Thorton, USA"));
        assert!(html.contains("<td data-format=\"location\">Vormir</td>"));
    }
}
