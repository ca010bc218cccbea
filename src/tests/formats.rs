use super::{for_language, for_path};
use crate::error::Error;
use crate::highlight::{Highlighter, TokenClasses};
use std::path::Path;

#[test]
fn test_go_by_extension() {
    let format = for_path(Path::new("src/main.go"), None).unwrap();
    assert_eq!(format.language(), "go");
    assert_eq!(format.line_comment(), "//");
    assert_eq!(format.block_comment(), Some(("/*", "*/")));
    assert!(format.directive_markers().contains(&"go:"));
}

#[test]
fn test_forced_language_wins_over_extension() {
    let format = for_path(Path::new("script.txt"), Some("python")).unwrap();
    assert_eq!(format.language(), "python");
    assert_eq!(format.line_comment(), "#");
    assert_eq!(format.block_comment(), None);
}

#[test]
fn test_extension_lookup_is_case_insensitive() {
    let format = for_language("JS").unwrap();
    assert_eq!(format.language(), "javascript");
    assert!(format.directive_markers().is_empty());
}

#[test]
fn test_unknown_extension() {
    let err = for_path(Path::new("notes.txt"), None).err().unwrap();
    assert!(matches!(err, Error::UnsupportedLanguage(ref name) if name == "txt"));
}

#[test]
fn test_missing_extension() {
    let err = for_path(Path::new("Makefile"), None).err().unwrap();
    assert!(matches!(err, Error::UnsupportedLanguage(_)));
}

const ACCEPTED: &[&str] = &[
    "go", "c", "h", "cpp", "cc", "cxx", "hpp", "hh", "java", "js", "mjs", "javascript", "ts",
    "typescript", "swift", "kt", "kotlin", "scala", "cs", "csharp", "py", "python", "rb", "ruby",
    "sh", "bash", "shell", "pl", "perl",
];

// Languages without a bundled grammar; their code is escaped but not marked up.
const PLAIN_TEXT: &[&str] = &["typescript", "swift", "kotlin"];

#[test]
fn test_every_language_resolves_to_a_grammar_or_plain_text() {
    let highlighter = Highlighter::new(TokenClasses::default()).unwrap();
    for name in ACCEPTED {
        let format = for_language(name).unwrap();
        match format.highlight_token() {
            Some(token) => {
                assert!(highlighter.has_grammar(token), "{name}: no grammar for {token}");
            }
            None => {
                assert!(PLAIN_TEXT.contains(&format.language()), "{name} is not highlighted");
            }
        }
    }
}

#[test]
fn test_csharp_fence_tag_differs_from_grammar_token() {
    let format = for_language("cs").unwrap();
    assert_eq!(format.language(), "csharp");
    assert_eq!(format.highlight_token(), Some("cs"));

    let out = Highlighter::new(TokenClasses::default())
        .unwrap()
        .highlight("public class Kind {}\n", format.highlight_token())
        .unwrap();
    assert!(out.contains("<span"), "{out}");
}
