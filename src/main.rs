//! weft: side-by-side literate documentation from commented source files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use weft::{config, Weaver};

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Literate side-by-side docs from commented source", long_about = None)]
struct Args {
    /// Source files to document
    #[arg(value_name = "FILE", required = true)]
    paths: Vec<PathBuf>,

    /// Output directory for documents and the stylesheet
    #[arg(long, value_name = "DIR")]
    outdir: Option<String>,

    /// Directory containing weft.html and weft.css
    #[arg(long, value_name = "DIR")]
    resdir: Option<String>,

    /// Relative path to the CSS file, for use with the <link> element
    #[arg(long, value_name = "PATH")]
    csspath: Option<String>,

    /// Include the CSS in the HTML file
    #[arg(long, overrides_with = "no_inline")]
    inline: bool,

    /// Link the CSS file instead of including it
    #[arg(long, overrides_with = "inline")]
    no_inline: bool,

    /// Generate Markdown rather than HTML
    #[arg(long, overrides_with = "no_md")]
    md: bool,

    /// Generate HTML even if weft.toml asks for Markdown
    #[arg(long, overrides_with = "md")]
    no_md: bool,

    /// Generate the HTML body only
    #[arg(long, overrides_with = "no_bare")]
    bare: bool,

    /// Generate a full HTML page
    #[arg(long, overrides_with = "bare")]
    no_bare: bool,

    /// Document only the leading comment block
    #[arg(long, overrides_with = "no_intro")]
    intro: bool,

    /// Document the whole file
    #[arg(long, overrides_with = "intro")]
    no_intro: bool,

    /// Comment syntax and highlighting language (default: from the file extension)
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Print the extracted sections as JSON instead of writing documents
    #[arg(long)]
    sections: bool,

    /// Log each step
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn apply(self, cfg: &mut config::Config) -> (Vec<PathBuf>, bool) {
        if let Some(outdir) = self.outdir {
            cfg.outdir = outdir;
        }
        if let Some(resdir) = self.resdir {
            cfg.resdir = resdir;
        }
        if let Some(csspath) = self.csspath {
            cfg.csspath = csspath;
        }
        if let Some(lang) = self.lang {
            cfg.lang = lang;
        }
        if let Some(inline) = switch(self.inline, self.no_inline) {
            cfg.inline = inline;
        }
        if let Some(markdown) = switch(self.md, self.no_md) {
            cfg.markdown = markdown;
        }
        if let Some(bare) = switch(self.bare, self.no_bare) {
            cfg.bare = bare;
        }
        if let Some(intro) = switch(self.intro, self.no_intro) {
            cfg.intro = intro;
        }
        (self.paths, self.sections)
    }
}

// `--x` / `--no-x` pairs override each other, so at most one of them is set.
fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: Args) -> weft::Result<()> {
    let mut cfg = config::Config::load()?;

    // Override config with command line args
    let (paths, dump) = args.apply(&mut cfg);

    let weaver = Weaver::new(cfg)?;

    if dump {
        for path in &paths {
            println!("{}", weaver.dump_sections(path)?);
        }
        return Ok(());
    }

    weaver.install_stylesheet()?;
    for path in &paths {
        weaver.process_file(path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
