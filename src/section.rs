//! Section representation for woven documents.
//!
//! A section pairs one group of leading comments with the code that follows it. Sections are
//! created empty by the extractor, grow line by line, and are later rewritten in place by the
//! renderer, so both halves are plain owned strings.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// One Doc/Code pair, the atomic unit of rendered output.
pub struct Section {
    /// Comment text with delimiters stripped, one `\n` per source line.
    pub doc: String,
    /// Code lines (blank lines included), one `\n` per source line.
    pub code: String,
}

impl Section {
    /// Build a section from its two halves.
    #[must_use]
    pub fn new(doc: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            doc: doc.into(),
            code: code.into(),
        }
    }

    /// True when the code half holds nothing but whitespace.
    ///
    /// Such sections render as a single full-width row.
    #[must_use]
    pub fn is_full_width(&self) -> bool {
        self.code.trim().is_empty()
    }
}
