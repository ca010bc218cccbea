//! weft: side-by-side literate documentation from commented source files.
//!
//! Leading comments become prose, the code that follows them becomes the code column. The
//! pipeline is classify → extract → render → assemble, one file at a time.
#![allow(clippy::multiple_crate_versions)]

pub mod assemble;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod formats;
pub mod highlight;
pub mod render;
pub mod resources;
pub mod section;
pub mod weaver;

pub use error::{Error, Result};
pub use section::Section;
pub use weaver::Weaver;
