use std::fmt;
use std::str::FromStr;

use tree_sitter::Language;

use crate::error::RenderError;

/// Languages the code viewer can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    Tsx,
    TypeScript,
    JavaScript,
    Css,
    Html,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 5] = [
        CodeLanguage::Tsx,
        CodeLanguage::TypeScript,
        CodeLanguage::JavaScript,
        CodeLanguage::Css,
        CodeLanguage::Html,
    ];

    /// Canonical tag, also written to the `data-lang` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Css => "css",
            Self::Html => "html",
        }
    }

    pub(crate) fn grammar(self) -> Language {
        match self {
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Css => tree_sitter_css::LANGUAGE.into(),
            Self::Html => tree_sitter_html::LANGUAGE.into(),
        }
    }

    /// Highlight query source. The TypeScript grammars only ship the patterns
    /// they add on top of JavaScript, so the JavaScript query is appended.
    pub(crate) fn highlights_query(self) -> String {
        let parts: &[&str] = match self {
            Self::Tsx => &[
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::JSX_HIGHLIGHT_QUERY,
            ],
            Self::TypeScript => &[
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
                tree_sitter_javascript::HIGHLIGHT_QUERY,
            ],
            Self::JavaScript => &[
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::JSX_HIGHLIGHT_QUERY,
            ],
            Self::Css => &[tree_sitter_css::HIGHLIGHTS_QUERY],
            Self::Html => &[tree_sitter_html::HIGHLIGHTS_QUERY],
        };
        parts.join("\n")
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeLanguage {
    type Err = RenderError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "tsx" => Ok(Self::Tsx),
            "ts" | "typescript" => Ok(Self::TypeScript),
            "js" | "jsx" | "javascript" => Ok(Self::JavaScript),
            "css" => Ok(Self::Css),
            "html" => Ok(Self::Html),
            _ => Err(RenderError::UnsupportedLanguage(tag.to_owned())),
        }
    }
}
