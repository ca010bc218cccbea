//! C-family comment syntax: `//` line comments and `/* ... */` blocks.
//!
//! Go is the only one with directives: `//go:generate`, `//go:build` and the legacy
//! `// +build` constraint lines.

use crate::formats::Format;

const GO_DIRECTIVES: &[&str] = &["go:", " +build"];

/// Comment markers shared by Go, C, Java, JavaScript and friends.
pub struct CStyleFormat {
    language: &'static str,
    grammar: Option<&'static str>,
    directives: &'static [&'static str],
}

impl CStyleFormat {
    /// Go, with its build and codegen directives.
    #[must_use]
    pub fn go() -> Self {
        Self {
            language: "go",
            grammar: Some("go"),
            directives: GO_DIRECTIVES,
        }
    }

    /// Look up a C-family language by name or file extension.
    #[must_use]
    pub fn for_language(name: &str) -> Option<Self> {
        // syntect ships no TypeScript, Swift or Kotlin grammar.
        let (language, grammar) = match name {
            "go" => return Some(Self::go()),
            "c" | "h" => ("c", Some("c")),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => ("cpp", Some("cpp")),
            "java" => ("java", Some("java")),
            "js" | "mjs" | "javascript" => ("javascript", Some("js")),
            "ts" | "typescript" => ("typescript", None),
            "swift" => ("swift", None),
            "kt" | "kotlin" => ("kotlin", None),
            "scala" => ("scala", Some("scala")),
            "cs" | "csharp" => ("csharp", Some("cs")),
            _ => return None,
        };
        Some(Self {
            language,
            grammar,
            directives: &[],
        })
    }
}

impl Format for CStyleFormat {
    fn language(&self) -> &str {
        self.language
    }

    fn highlight_token(&self) -> Option<&str> {
        self.grammar
    }

    fn line_comment(&self) -> &'static str {
        "//"
    }

    fn block_comment(&self) -> Option<(&str, &str)> {
        Some(("/*", "*/"))
    }

    fn directive_markers(&self) -> &[&str] {
        self.directives
    }
}
