//! The weave pipeline: extract sections, render them, assemble the document.
//!
//! A `Weaver` is built once per run from the merged configuration. It owns everything that is
//! expensive or shared between files (grammars, compiled template, stylesheet) and hands each
//! file its own classifier, so nothing leaks from one file into the next.

use crate::assemble::{self, Document};
use crate::classify::CommentPatterns;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract::extract_sections;
use crate::formats::{self, Format};
use crate::highlight::{Highlighter, TokenClasses};
use crate::render;
use crate::resources::Resources;
use crate::section::Section;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only state shared by every file of one run.
pub struct Weaver {
    config: Config,
    resources: Resources,
    highlighter: Highlighter,
}

impl Weaver {
    /// Load resources and grammars for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or stylesheet cannot be loaded.
    pub fn new(config: Config) -> Result<Self> {
        let resources = Resources::locate(&config.resdir)?;
        let highlighter = Highlighter::new(TokenClasses::default())?;
        Ok(Self {
            config,
            resources,
            highlighter,
        })
    }

    /// Extract the unrendered sections of `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format's comment markers do not compile.
    pub fn sections(&self, source: &str, format: &dyn Format) -> Result<Vec<Section>> {
        let patterns = CommentPatterns::new(format)?;
        Ok(extract_sections(source, &patterns, self.config.intro))
    }

    /// Extract comments from source code, render them and the code, and assemble the document.
    ///
    /// # Errors
    ///
    /// Returns an error if highlighting or template execution fails.
    pub fn generate_docs(&self, title: &str, source: &str, format: &dyn Format) -> Result<String> {
        let mut sections = self.sections(source, format)?;
        tracing::debug!(title, sections = sections.len(), "extracted sections");

        if self.config.markdown {
            render::markdown_code(&mut sections, format.language());
            return Ok(assemble::join_sections(&sections));
        }

        render::highlight_code(&mut sections, &self.highlighter, format.highlight_token())?;
        render::markdown_comments(&mut sections);
        let doc = Document {
            title,
            sections: &sections,
            css_path: assemble::css_href(&self.config.csspath),
            style: self.resources.style(),
            full: !self.config.bare,
            inline_css: self.config.inline,
        };
        assemble::render_html(&self.resources, &doc)
    }

    /// Path of the document generated for `input`.
    #[must_use]
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or(input.as_os_str());
        let name = format!(
            "{}.{}",
            stem.to_string_lossy(),
            self.config.output_extension()
        );
        Path::new(&self.config.outdir).join(name)
    }

    /// Generate documentation for a source file and write it to the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its language is unknown, rendering fails,
    /// or the output cannot be written.
    pub fn process_file(&self, path: &Path) -> Result<PathBuf> {
        let source = read_source(path)?;
        let format = formats::for_path(path, self.config.language())?;
        let title = file_name(path);
        let docs = self.generate_docs(&title, &source, format.as_ref())?;

        let out = self.output_path(path);
        fs::create_dir_all(&self.config.outdir).map_err(|source| Error::Write {
            path: PathBuf::from(&self.config.outdir),
            source,
        })?;
        fs::write(&out, docs).map_err(|source| Error::Write {
            path: out.clone(),
            source,
        })?;
        tracing::info!(input = %path.display(), output = %out.display(), "wrote documentation");
        Ok(out)
    }

    /// Extract a source file's sections as pretty JSON, without rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its language is unknown.
    pub fn dump_sections(&self, path: &Path) -> Result<String> {
        let source = read_source(path)?;
        let format = formats::for_path(path, self.config.language())?;
        let sections = self.sections(&source, format.as_ref())?;
        Ok(serde_json::to_string_pretty(&sections)?)
    }

    /// Copy the stylesheet next to the HTML output, unless it is inlined or not needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the stylesheet cannot be written.
    pub fn install_stylesheet(&self) -> Result<Option<PathBuf>> {
        if self.config.markdown || self.config.inline {
            return Ok(None);
        }
        let dir = Path::new(&self.config.outdir).join(&self.config.csspath);
        self.resources.install_stylesheet(&dir).map(Some)
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "tests/weaver.rs"]
mod tests;
