use super::{css_href, join_sections, render_html, Document};
use crate::resources::Resources;
use crate::section::Section;
use pretty_assertions::assert_eq;

fn document<'a>(sections: &'a [Section], style: &'a str) -> Document<'a> {
    Document {
        title: "main.go",
        sections,
        css_path: css_href(""),
        style,
        full: true,
        inline_css: false,
    }
}

#[test]
fn test_join_sections() {
    let sections = vec![
        Section::new("Title\n", "\n```go\nx\n```\n"),
        Section::new("Only text\n", "\n"),
        Section::new("", ""),
    ];
    assert_eq!(
        join_sections(&sections),
        "Title\n\n```go\nx\n```\nOnly text\n\n"
    );
}

#[test]
fn test_css_href() {
    assert_eq!(css_href(""), "weft.css");
    assert_eq!(css_href("css"), "css/weft.css");
    assert_eq!(css_href("assets/css/"), "assets/css/weft.css");
}

#[test]
fn test_full_width_and_two_column_rows() {
    let resources = Resources::builtin().unwrap();
    let sections = vec![
        Section::new("<p>Intro</p>\n", ""),
        Section::new("<p>Code</p>\n", "<span class=\"keyword\">package</span> main\n"),
    ];
    let html = render_html(&resources, &document(&sections, resources.style())).unwrap();

    assert_eq!(html.matches("colspan=\"2\"").count(), 1, "{html}");
    assert_eq!(html.matches("<td class=\"code\">").count(), 1, "{html}");
    assert!(html.contains("<span class=\"keyword\">package</span>"), "{html}");
    assert!(html.find("Intro").unwrap() < html.find("Code").unwrap());
}

#[test]
fn test_full_page_links_stylesheet() {
    let resources = Resources::builtin().unwrap();
    let sections = vec![Section::default()];
    let html = render_html(&resources, &document(&sections, resources.style())).unwrap();

    assert!(html.contains("<!DOCTYPE html>"), "{html}");
    assert!(html.contains(r#"<link rel="stylesheet" href="weft.css">"#), "{html}");
    assert!(!html.contains("<style>"), "{html}");
}

#[test]
fn test_bare_inline_fragment() {
    let resources = Resources::builtin().unwrap();
    let sections = vec![Section::default()];
    let doc = Document {
        full: false,
        inline_css: true,
        ..document(&sections, ".keyword { color: green; }")
    };
    let html = render_html(&resources, &doc).unwrap();

    assert!(!html.contains("<html>"), "{html}");
    assert!(!html.contains("<link"), "{html}");
    assert!(html.contains(".keyword { color: green; }"), "{html}");
    assert!(html.contains("<table"), "{html}");
}

#[test]
fn test_title_is_escaped() {
    let resources = Resources::builtin().unwrap();
    let sections = vec![Section::default()];
    let doc = Document {
        title: "<script>.go",
        ..document(&sections, "")
    };
    let html = render_html(&resources, &doc).unwrap();
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains("&lt;script&gt;.go"), "{html}");
}
