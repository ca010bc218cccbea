use super::{Highlighter, TokenClasses};
use regex::Regex;

fn highlighter() -> Highlighter {
    Highlighter::new(TokenClasses::default()).unwrap()
}

fn strip_markup(html: &str) -> String {
    let tags = Regex::new("<[^>]*>").unwrap();
    html_escape::decode_html_entities(&tags.replace_all(html, "")).into_owned()
}

#[test]
fn test_go_tokens_get_classes() {
    let out = highlighter()
        .highlight("func main() {\n\tx := 42 // answer\n}\n", Some("go"))
        .unwrap();

    assert!(out.contains(r#"<span class="keyword">func</span>"#), "{out}");
    assert!(out.contains(r#"<span class="literal">42</span>"#), "{out}");
    assert!(out.contains(r#"class="comment""#), "{out}");
}

#[test]
fn test_whitespace_and_newlines_survive() {
    let code = "func f(a, b int) bool {\n\n\treturn a < b &&\n\t\tb > 0\n}\n\n";
    let out = highlighter().highlight(code, Some("go")).unwrap();
    assert_eq!(strip_markup(&out), code);
}

#[test]
fn test_markup_is_escaped() {
    let out = highlighter().highlight("if a < b && c {\n}\n", Some("go")).unwrap();
    assert!(!out.contains("a < b"), "{out}");
    assert!(out.contains("&lt;"), "{out}");
    assert!(out.contains("&amp;"), "{out}");
}

#[test]
fn test_unknown_language_is_plain_text() {
    let out = highlighter().highlight("<x> & y\n", Some("no-such-language")).unwrap();
    assert_eq!(out, "&lt;x&gt; &amp; y\n");
}

#[test]
fn test_custom_class_names() {
    let classes = TokenClasses {
        keyword: "kw".to_string(),
        ..TokenClasses::default()
    };
    let out = Highlighter::new(classes)
        .unwrap()
        .highlight("package main\n", Some("go"))
        .unwrap();
    assert!(out.contains(r#"class="kw""#), "{out}");
    assert!(!out.contains(r#"class="keyword""#), "{out}");
}

#[test]
fn test_missing_token_is_plain_text() {
    let out = highlighter().highlight("func f() {}\n", None).unwrap();
    assert_eq!(out, "func f() {}\n");
}
