//! Final assembly of rendered sections into one output document.

use crate::error::Result;
use crate::resources::{Resources, CSS_FILE};
use crate::section::Section;
use serde::Serialize;

#[derive(Serialize)]
/// Value handed to the HTML template.
pub struct Document<'a> {
    /// Source file name shown as the page title.
    pub title: &'a str,
    /// Rendered sections in source order.
    pub sections: &'a [Section],
    /// Stylesheet URL for the `<link>` element.
    pub css_path: String,
    /// Stylesheet text for inlining.
    pub style: &'a str,
    /// Full page rather than a body fragment.
    pub full: bool,
    /// Embed `style` instead of linking `css_path`.
    pub inline_css: bool,
}

/// Stylesheet URL as seen from the generated page.
#[must_use]
pub fn css_href(csspath: &str) -> String {
    let dir = csspath.trim_end_matches(['/', '\\']);
    if dir.is_empty() {
        CSS_FILE.to_string()
    } else {
        format!("{dir}/{CSS_FILE}")
    }
}

/// Execute the HTML template for `doc`.
///
/// # Errors
///
/// Returns an error if template execution fails.
pub fn render_html(resources: &Resources, doc: &Document<'_>) -> Result<String> {
    resources.render(doc)
}

/// Join sections into a single Markdown string, each doc directly followed by its code.
#[must_use]
pub fn join_sections(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&section.doc);
        out.push_str(&section.code);
    }
    out
}

#[cfg(test)]
#[path = "tests/assemble.rs"]
mod tests;
