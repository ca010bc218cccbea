//! Split a source file into sections.
//!
//! Each section holds a comment group and the code that follows it. A comment line arriving
//! after code closes the current section and opens the next one, so a blank line between two
//! comment blocks (which counts as code) splits them into separate sections. The renderer
//! relies on this to produce full-width rows.

use crate::classify::CommentPatterns;
use crate::section::Section;

/// Group the lines of `source` into ordered sections.
///
/// Directive lines are dropped. With `intro_only` set, extraction stops at the first code
/// line, leaving just the leading comment block. The result always holds at least one
/// (possibly empty) section.
#[must_use]
pub fn extract_sections(
    source: &str,
    patterns: &CommentPatterns,
    intro_only: bool,
) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();
    let mut classifier = patterns.classifier();

    for line in source.lines() {
        if patterns.is_directive(line) {
            continue;
        }
        if classifier.classify(line) {
            // A comment after code starts a new section.
            if !current.code.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.doc.push_str(&patterns.strip(line));
            current.doc.push('\n');
        } else {
            if intro_only {
                break;
            }
            current.code.push_str(line);
            current.code.push('\n');
        }
    }

    sections.push(current);
    sections
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
