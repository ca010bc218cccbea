//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a weft.toml, and if present we load settings from there.
//! Every field mirrors a command-line flag; flags given on the command line win.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "weft.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from weft.toml or falling back to defaults.
pub struct Config {
    #[facet(default = ".".to_string())]
    /// Directory receiving the generated documents (and the stylesheet).
    pub outdir: String,
    #[facet(default = String::new())]
    /// Directory holding `weft.html` and `weft.css`; empty uses the built-in pair.
    pub resdir: String,
    #[facet(default = String::new())]
    /// Stylesheet location relative to the output directory.
    pub csspath: String,
    #[facet(default = false)]
    /// Embed the stylesheet instead of linking it.
    pub inline: bool,
    #[facet(default = false)]
    /// Produce Markdown rather than HTML.
    pub markdown: bool,
    #[facet(default = false)]
    /// Emit only the HTML body fragment.
    pub bare: bool,
    #[facet(default = false)]
    /// Stop at the first code line, documenting only the leading comment block.
    pub intro: bool,
    #[facet(default = String::new())]
    /// Language forced for every input; empty picks it from the file extension.
    pub lang: String,
}

impl Config {
    /// Load configuration from weft.toml in the working directory, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Self::parse("", path);
        }
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The forced language, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        (!self.lang.is_empty()).then_some(self.lang.as_str())
    }

    /// Extension of the generated documents.
    #[must_use]
    pub fn output_extension(&self) -> &'static str {
        if self.markdown {
            "md"
        } else {
            "html"
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
