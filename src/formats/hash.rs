//! Hash comment syntax for scripting languages.
//!
//! There are no block comments here, and the only directive is the shebang line (`#!`), which
//! would otherwise become the first line of the documentation.

use crate::formats::Format;

/// `#` line comments, as used by Python, Ruby, shell and Perl.
pub struct HashFormat {
    language: &'static str,
}

impl HashFormat {
    /// Look up a hash-commented language by name or file extension.
    #[must_use]
    pub fn for_language(name: &str) -> Option<Self> {
        let language = match name {
            "py" | "python" => "python",
            "rb" | "ruby" => "ruby",
            "sh" | "bash" | "shell" => "bash",
            "pl" | "perl" => "perl",
            _ => return None,
        };
        Some(Self { language })
    }
}

impl Format for HashFormat {
    fn language(&self) -> &str {
        self.language
    }

    fn highlight_token(&self) -> Option<&str> {
        Some(self.language)
    }

    fn line_comment(&self) -> &'static str {
        "#"
    }

    fn block_comment(&self) -> Option<(&str, &str)> {
        None
    }

    fn directive_markers(&self) -> &[&str] {
        &["!"]
    }
}
