//! Per-section rendering: Markdown for comments, highlighting or fences for code.
//!
//! Every function here rewrites the sections in place. Sections are rendered independently of
//! each other; the highlighter never sees two sections joined into one stream.

use crate::error::Result;
use crate::highlight::Highlighter;
use crate::section::Section;
use comrak::{markdown_to_html, Options};

fn markdown_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.description_lists = true;
    options.extension.header_ids = Some(String::new());
    options.parse.smart = true;
    // Comments may carry raw HTML such as `<br>`.
    options.render.unsafe_ = true;
    options
}

const LINK_OPEN: &str = "<a href=\"";

// In-page anchors (`href="#..."`) keep the current context.
fn target_blank(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(at) = rest.find(LINK_OPEN) {
        out.push_str(&rest[..at]);
        rest = &rest[at + LINK_OPEN.len()..];
        if rest.starts_with('#') {
            out.push_str(LINK_OPEN);
        } else {
            out.push_str("<a target=\"_blank\" href=\"");
        }
    }
    out.push_str(rest);
    out
}

/// Render Markdown to HTML with the extension set used for comment text.
///
/// Links to other documents open in a new browsing context.
#[must_use]
pub fn render_markdown(text: &str) -> String {
    target_blank(&markdown_to_html(text, &markdown_options()))
}

/// Apply Markdown to each section's documentation.
pub fn markdown_comments(sections: &mut [Section]) {
    for section in sections {
        section.doc = render_markdown(&section.doc);
    }
}

/// Split code into its leading run of spaces and tabs, and the rest.
#[must_use]
pub fn split_leading_ws(s: &str) -> (&str, &str) {
    let code = s.trim_start_matches([' ', '\t']);
    s.split_at(s.len() - code.len())
}

/// Apply syntax highlighting to each section's code, using the grammar named by `token`.
///
/// Code that is only whitespace becomes the empty string, which the template renders as a
/// full-width row. The leading indentation is kept out of the highlighter and re-attached.
///
/// # Errors
///
/// Returns an error if the highlighter fails on any section.
pub fn highlight_code(
    sections: &mut [Section],
    highlighter: &Highlighter,
    token: Option<&str>,
) -> Result<()> {
    for section in sections {
        if section.is_full_width() {
            section.code = String::new();
            continue;
        }
        let (ws, code) = split_leading_ws(&section.code);
        section.code = format!("{ws}{}", highlighter.highlight(code, token)?);
    }
    Ok(())
}

/// Put each section's code into a fenced Markdown code block tagged with `language`.
///
/// A lone newline stays as it is so that empty sections remain empty.
pub fn markdown_code(sections: &mut [Section], language: &str) {
    for section in sections {
        if !section.code.is_empty() && section.code != "\n" {
            section.code = format!("\n```{language}\n{}```\n", section.code);
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
