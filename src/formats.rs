//! Format trait and implementations for different comment syntaxes.
//!
//! This module defines the `Format` trait which abstracts over source languages by providing
//! the comment markers the classifier looks for, the directive markers it must drop, and the
//! language name used for highlighting and Markdown code fences.

pub mod c_style;
pub mod hash;

use crate::error::{Error, Result};
use std::path::Path;

/// Comment syntax of a source language.
pub trait Format {
    /// Language name, used as the Markdown fence tag.
    fn language(&self) -> &str;
    /// Token naming the bundled syntect grammar, or `None` when there is none and the code is
    /// emitted as escaped plain text.
    fn highlight_token(&self) -> Option<&str>;
    /// Marker opening a single-line comment, e.g. `//`.
    fn line_comment(&self) -> &str;
    /// Open and close markers of a block comment, if the language has one.
    fn block_comment(&self) -> Option<(&str, &str)>;
    /// Markers that, directly after the line-comment marker at column 0, make a directive.
    fn directive_markers(&self) -> &[&str];
}

/// Pick the comment syntax for a language name or file extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] when no format knows the name.
pub fn for_language(name: &str) -> Result<Box<dyn Format>> {
    let name = name.to_ascii_lowercase();
    if let Some(format) = c_style::CStyleFormat::for_language(&name) {
        return Ok(Box::new(format));
    }
    if let Some(format) = hash::HashFormat::for_language(&name) {
        return Ok(Box::new(format));
    }
    Err(Error::UnsupportedLanguage(name))
}

/// Pick the comment syntax for a source file, either forced by `language` or from its extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] when the file has no extension or it is unknown.
pub fn for_path(path: &Path, language: Option<&str>) -> Result<Box<dyn Format>> {
    if let Some(language) = language {
        return for_language(language);
    }
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| Error::UnsupportedLanguage(path.display().to_string()))?;
    for_language(ext)
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
