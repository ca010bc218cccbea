//! Syntax highlighting with a fixed, small set of CSS classes.
//!
//! syntect's own HTML generators emit one class per scope atom (`keyword control go`), which
//! ties the stylesheet to the grammar. Instead we drive syntect's parser directly and collapse
//! every scope stack into one of five token classes, leaving anything else as plain escaped
//! text. Every byte of the input, whitespace and newlines included, appears in the output.

use crate::error::Result;
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

#[derive(Clone, Debug, PartialEq, Eq)]
/// CSS class names emitted for each token kind.
pub struct TokenClasses {
    /// Operators and punctuation.
    pub operator: String,
    /// Identifiers: names, variables, library symbols.
    pub ident: String,
    /// String, numeric, character and language literals.
    pub literal: String,
    /// Keywords and storage modifiers.
    pub keyword: String,
    /// Comments left inside code.
    pub comment: String,
}

impl Default for TokenClasses {
    fn default() -> Self {
        Self {
            operator: "operator".to_string(),
            ident: "ident".to_string(),
            literal: "literal".to_string(),
            keyword: "keyword".to_string(),
            comment: "comment".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum TokenKind {
    Operator,
    Ident,
    Literal,
    Keyword,
    Comment,
}

// Checked in order; the first selector found anywhere in the stack wins, so a quote inside a
// string is a literal rather than punctuation.
const SELECTORS: &[(&str, TokenKind)] = &[
    ("comment", TokenKind::Comment),
    ("string", TokenKind::Literal),
    ("constant.numeric", TokenKind::Literal),
    ("constant.character", TokenKind::Literal),
    ("constant.language", TokenKind::Literal),
    ("keyword.operator", TokenKind::Operator),
    ("keyword", TokenKind::Keyword),
    ("storage", TokenKind::Keyword),
    ("punctuation", TokenKind::Operator),
    ("entity.name", TokenKind::Ident),
    ("variable", TokenKind::Ident),
    ("support", TokenKind::Ident),
];

/// Grammar set and class table, loaded once and shared by every file.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    selectors: Vec<(Scope, TokenKind)>,
    classes: TokenClasses,
}

impl Highlighter {
    /// Load the bundled grammars and compile the class selectors.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is not a valid scope.
    pub fn new(classes: TokenClasses) -> Result<Self> {
        let selectors = SELECTORS
            .iter()
            .map(|&(selector, kind)| -> Result<(Scope, TokenKind)> {
                Ok((Scope::new(selector)?, kind))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            selectors,
            classes,
        })
    }

    /// Whether a bundled grammar answers to `token`.
    #[must_use]
    pub fn has_grammar(&self, token: &str) -> bool {
        self.syntaxes.find_syntax_by_token(token).is_some()
    }

    fn syntax(&self, token: Option<&str>) -> &SyntaxReference {
        token
            .and_then(|token| self.syntaxes.find_syntax_by_token(token))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Mark up `code` with `<span class="...">` tokens using the grammar named by `token`.
    ///
    /// Without a token, or with one no grammar answers to, the input is only escaped.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar fails to parse a line.
    pub fn highlight(&self, code: &str, token: Option<&str>) -> Result<String> {
        let mut state = ParseState::new(self.syntax(token));
        let mut stack = ScopeStack::new();
        let mut out = String::with_capacity(code.len() * 2);

        for line in LinesWithEndings::from(code) {
            let ops = state.parse_line(line, &self.syntaxes)?;
            let mut cursor = 0;
            for (offset, op) in ops {
                self.push_token(&mut out, &line[cursor..offset], &stack);
                stack.apply(&op)?;
                cursor = offset;
            }
            self.push_token(&mut out, &line[cursor..], &stack);
        }

        Ok(out)
    }

    fn class_for(&self, stack: &ScopeStack) -> Option<&str> {
        let scopes = stack.as_slice();
        let kind = self
            .selectors
            .iter()
            .find(|(selector, _)| scopes.iter().any(|scope| selector.is_prefix_of(*scope)))
            .map(|&(_, kind)| kind)?;
        Some(match kind {
            TokenKind::Operator => self.classes.operator.as_str(),
            TokenKind::Ident => self.classes.ident.as_str(),
            TokenKind::Literal => self.classes.literal.as_str(),
            TokenKind::Keyword => self.classes.keyword.as_str(),
            TokenKind::Comment => self.classes.comment.as_str(),
        })
    }

    fn push_token(&self, out: &mut String, text: &str, stack: &ScopeStack) {
        if text.is_empty() {
            return;
        }
        let escaped = html_escape::encode_text(text);
        match self.class_for(stack) {
            Some(class) if !text.trim().is_empty() => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&escaped);
                out.push_str("</span>");
            }
            _ => out.push_str(&escaped),
        }
    }
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
