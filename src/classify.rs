//! Line classification: is this line documentation, code, or a directive to drop?
//!
//! Classification works on whole lines with anchored patterns rather than a tokenizer. A line
//! counts as comment text when it starts with the line-comment marker, starts with the
//! block-open marker, ends with the block-close marker, or sits between the latter two. The
//! only state carried from line to line is whether a block comment is open.
//!
//! ```text
//! Code --(block open)--> InBlockComment --(block close)--> Code
//! ```
//!
//! An unterminated block comment keeps the machine in `InBlockComment` until the end of the
//! file, so everything after it becomes documentation.

use crate::error::Result;
use crate::formats::Format;
use regex::Regex;
use std::borrow::Cow;

/// Compiled comment and directive patterns for one [`Format`].
pub struct CommentPatterns {
    line: Regex,
    block_start: Option<Regex>,
    block_end: Option<Regex>,
    delimiters: Regex,
    directive: Option<Regex>,
}

impl CommentPatterns {
    /// Compile the patterns for a format's markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the escaped markers do not form a valid pattern.
    pub fn new(format: &dyn Format) -> Result<Self> {
        let line_marker = regex::escape(format.line_comment());
        let line = format!(r"^\s*{line_marker}\s?");
        let mut alternatives = vec![line.clone()];

        let (block_start, block_end) = match format.block_comment() {
            Some((open, close)) => {
                let start = format!(r"^\s*{}\s?", regex::escape(open));
                let end = format!(r"\s?{}\s*$", regex::escape(close));
                alternatives.push(start.clone());
                alternatives.push(end.clone());
                (Some(Regex::new(&start)?), Some(Regex::new(&end)?))
            }
            None => (None, None),
        };

        let directive = if format.directive_markers().is_empty() {
            None
        } else {
            let markers = format
                .directive_markers()
                .iter()
                .map(|marker| regex::escape(marker))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("^{line_marker}(?:{markers})"))?)
        };

        Ok(Self {
            line: Regex::new(&line)?,
            block_start,
            block_end,
            delimiters: Regex::new(&alternatives.join("|"))?,
            directive,
        })
    }

    /// True for build or codegen directives that must not appear in the output.
    #[must_use]
    pub fn is_directive(&self, line: &str) -> bool {
        self.directive.as_ref().is_some_and(|re| re.is_match(line))
    }

    /// Remove every comment delimiter (and the single space after an opening one) from a line.
    #[must_use]
    pub fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.delimiters.replace_all(line, "")
    }

    /// Start a fresh classifier for one source file.
    #[must_use]
    pub fn classifier(&self) -> LineClassifier<'_> {
        LineClassifier {
            patterns: self,
            state: State::Code,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether the classifier is inside an open block comment.
pub enum State {
    /// Outside any block comment.
    Code,
    /// After a block-open line whose close has not been seen yet.
    InBlockComment,
}

/// Per-file state machine deciding which lines are comment text.
pub struct LineClassifier<'a> {
    patterns: &'a CommentPatterns,
    state: State,
}

impl LineClassifier<'_> {
    /// Classify one line, updating the block-comment state.
    ///
    /// Returns true when the line belongs to a comment region.
    pub fn classify(&mut self, line: &str) -> bool {
        if self.patterns.line.is_match(line) {
            return true;
        }
        if matches(self.patterns.block_start.as_ref(), line) {
            self.state = State::InBlockComment;
            return true;
        }
        if matches(self.patterns.block_end.as_ref(), line) {
            self.state = State::Code;
            return true;
        }
        self.state == State::InBlockComment
    }

    /// Current block-comment state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }
}

fn matches(pattern: Option<&Regex>, line: &str) -> bool {
    pattern.is_some_and(|re| re.is_match(line))
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
