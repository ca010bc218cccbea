//! Error type shared by every stage of the weave.
//!
//! Nothing in weft recovers from a failure: a read error, a missing resource or a template
//! that fails to execute all end the run. The variants exist so the final message says which
//! stage gave up and on which path.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Fatal failure raised while weaving documentation.
pub enum Error {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// An output file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The template or stylesheet could not be loaded.
    #[error("failed to load resource {path}: {source}")]
    Resource {
        /// Resource file that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// `weft.toml` exists but does not describe a valid configuration.
    #[error("invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// No comment syntax is known for the requested language or file extension.
    #[error("no comment syntax known for {0:?}")]
    UnsupportedLanguage(String),

    /// A comment marker produced an invalid pattern.
    #[error("invalid comment pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Template compilation or execution failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The highlighter could not parse a line of code.
    #[error("highlighting failed: {0}")]
    Highlight(#[from] syntect::parsing::ParsingError),

    /// The highlighter produced an inconsistent scope stack.
    #[error("highlighting failed: {0}")]
    Scope(#[from] syntect::parsing::ScopeError),

    /// A token class selector is not a valid scope.
    #[error("invalid token scope: {0}")]
    TokenScope(#[from] syntect::parsing::ParseScopeError),

    /// Sections could not be serialised for `--sections`.
    #[error("failed to serialise sections: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout weft.
pub type Result<T> = std::result::Result<T, Error>;
