//! Template and stylesheet: loaded once, installed next to the output.
//!
//! The built-in pair is compiled into the binary, so weft works without any resource
//! directory. `--resdir` swaps in a custom pair; a missing file there ends the run before any
//! source is processed.

use crate::error::{Error, Result};
use minijinja::Environment;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the HTML template inside a resource directory.
pub const TEMPLATE_FILE: &str = "weft.html";
/// File name of the stylesheet inside a resource directory and next to the output.
pub const CSS_FILE: &str = "weft.css";

const DEFAULT_TEMPLATE: &str = include_str!("../resources/weft.html");
const DEFAULT_CSS: &str = include_str!("../resources/weft.css");

/// Compiled template plus stylesheet text.
pub struct Resources {
    env: Environment<'static>,
    style: String,
    css_source: Option<PathBuf>,
}

impl Resources {
    /// Use the template and stylesheet compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not compile.
    pub fn builtin() -> Result<Self> {
        Self::from_parts(DEFAULT_TEMPLATE.to_string(), DEFAULT_CSS.to_string(), None)
    }

    /// Load `weft.html` and `weft.css` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or the template does not compile.
    pub fn load(dir: &Path) -> Result<Self> {
        let template = read_resource(&dir.join(TEMPLATE_FILE))?;
        let css_path = dir.join(CSS_FILE);
        let style = read_resource(&css_path)?;
        Self::from_parts(template, style, Some(css_path))
    }

    /// Load from `resdir` when given, otherwise use the built-in pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the resources cannot be loaded.
    pub fn locate(resdir: &str) -> Result<Self> {
        if resdir.is_empty() {
            tracing::debug!("using built-in template and stylesheet");
            Self::builtin()
        } else {
            tracing::debug!(resdir, "loading template and stylesheet");
            Self::load(Path::new(resdir))
        }
    }

    fn from_parts(template: String, style: String, css_source: Option<PathBuf>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_FILE, template)?;
        Ok(Self {
            env,
            style,
            css_source,
        })
    }

    /// Render the HTML template against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if template execution fails.
    pub fn render<S: serde::Serialize>(&self, ctx: S) -> Result<String> {
        Ok(self.env.get_template(TEMPLATE_FILE)?.render(ctx)?)
    }

    /// Stylesheet text, for inlining or installing.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Write the stylesheet into `dir`, creating it if needed.
    ///
    /// The file is written to a temporary sibling first and renamed into place. Nothing is
    /// written when the destination is the stylesheet that was loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn install_stylesheet(&self, dir: &Path) -> Result<PathBuf> {
        let dst = dir.join(CSS_FILE);
        if self.css_source.as_deref().is_some_and(|src| same_file(src, &dst)) {
            tracing::debug!(path = %dst.display(), "stylesheet already in place");
            return Ok(dst);
        }

        let write_err = |source| Error::Write {
            path: dst.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(|source| Error::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(self.style.as_bytes()).map_err(write_err)?;
        set_readable(tmp.path()).map_err(write_err)?;
        tmp.persist(&dst).map_err(|e| write_err(e.error))?;

        tracing::info!(path = %dst.display(), "installed stylesheet");
        Ok(dst)
    }
}

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn set_readable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "tests/resources.rs"]
mod tests;
