//! Syntax highlighting for question code samples.
//!
//! Source text and a language tag go in, a self-contained `<pre>` block comes
//! out. Grammars and queries are compiled once, on first use, and then shared
//! by every caller of the same [`HighlightService`].

mod language;
mod theme;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::OnceLock;

use prep_core::model::line_count;
use streaming_iterator::StreamingIterator;
use thiserror::Error;
use tracing::{debug, error, warn};
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

use crate::error::RenderError;

pub use language::CodeLanguage;
pub use theme::{HIGHLIGHT_NAMES, HighlightId, ThemeColors, highlight_id_for_name, theme_colors};

/// Code-level limits for the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightConfig {
    pub max_source_bytes: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: 64 * 1024,
        }
    }
}

/// Markup for one code sample and whether it carries syntax colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCode {
    pub html: String,
    pub highlighted: bool,
}

/// Shared entry point for highlighting.
#[derive(Default)]
pub struct HighlightService {
    config: HighlightConfig,
    highlighter: OnceLock<Highlighter>,
}

impl HighlightService {
    #[must_use]
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            highlighter: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> HighlightConfig {
        self.config
    }

    /// Whether the grammars have been compiled yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.highlighter.get().is_some()
    }

    /// Highlight `code` as `language` (`tsx`, `ts`, `js`, `css`, `html`, ...).
    ///
    /// Syntax errors in the sample are not failures; the parser recovers and
    /// whatever it recognised is still colored.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnsupportedLanguage` for unknown tags,
    /// `RenderError::SourceTooLarge` above `max_source_bytes`,
    /// `RenderError::GrammarUnavailable` when the grammar failed to load and
    /// `RenderError::ParseFailed` when the parser gives up.
    pub fn highlight(&self, code: &str, language: &str) -> Result<String, RenderError> {
        let language: CodeLanguage = language.parse()?;
        if code.len() > self.config.max_source_bytes {
            return Err(RenderError::SourceTooLarge {
                len: code.len(),
                max: self.config.max_source_bytes,
            });
        }
        self.highlighter().render(code, language)
    }

    /// Like [`HighlightService::highlight`], but never fails: errors are
    /// logged and the sample is rendered as escaped plain text.
    #[must_use]
    pub fn highlight_or_plain(&self, code: &str, language: &str) -> RenderedCode {
        match self.highlight(code, language) {
            Ok(html) => RenderedCode {
                html,
                highlighted: true,
            },
            Err(err) => {
                warn!(language, error = %err, "highlighting failed; rendering plain code");
                RenderedCode {
                    html: render_plain(code, language),
                    highlighted: false,
                }
            }
        }
    }

    fn highlighter(&self) -> &Highlighter {
        self.highlighter.get_or_init(|| {
            debug!("compiling highlight grammars");
            Highlighter::load()
        })
    }
}

/// Escaped, unstyled rendering with the same line structure as highlighted
/// output.
#[must_use]
pub fn render_plain(code: &str, language: &str) -> String {
    let mut out = String::with_capacity(code.len() + 64);
    out.push_str(r#"<pre class="hl hl--plain" data-lang=""#);
    escape_into(language, &mut out);
    out.push_str(r#""><code>"#);
    for line in code_lines(code) {
        out.push_str(r#"<span class="line">"#);
        escape_into(line, &mut out);
        out.push_str("</span>\n");
    }
    out.push_str("</code></pre>");
    out
}

//
// ─── GRAMMARS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
enum GrammarLoadError {
    #[error(transparent)]
    Language(#[from] tree_sitter::LanguageError),
    #[error(transparent)]
    Query(#[from] tree_sitter::QueryError),
}

struct Grammar {
    language: Language,
    query: Query,
    /// Highlight for each capture index of `query`, `None` for captures the
    /// theme does not color.
    capture_ids: Vec<Option<HighlightId>>,
}

impl Grammar {
    fn compile(language: CodeLanguage) -> Result<Self, GrammarLoadError> {
        let ts_language = language.grammar();
        Parser::new().set_language(&ts_language)?;
        let query = Query::new(&ts_language, &language.highlights_query())?;
        let capture_ids = query
            .capture_names()
            .iter()
            .map(|name| highlight_id_for_name(name))
            .collect();
        Ok(Self {
            language: ts_language,
            query,
            capture_ids,
        })
    }

    /// Highlight owning each byte of `source`.
    ///
    /// Nested captures paint over their parents; when several patterns
    /// capture the same node, the one listed first in the query wins.
    fn paint(&self, source: &str, tree: &Tree) -> Vec<Option<HighlightId>> {
        let mut spans: Vec<(Range<usize>, HighlightId)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut captures = cursor.captures(&self.query, tree.root_node(), source.as_bytes());
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let Some(Some(id)) = self.capture_ids.get(capture.index as usize) else {
                continue;
            };
            let range = capture.node.byte_range();
            if !range.is_empty() {
                spans.push((range, *id));
            }
        }

        let mut ordered: Vec<(usize, Range<usize>, HighlightId)> = spans
            .into_iter()
            .enumerate()
            .map(|(order, (range, id))| (order, range, id))
            .collect();
        ordered.sort_by_key(|(order, range, _)| (Reverse(range.len()), Reverse(*order)));

        let mut owners = vec![None; source.len()];
        for (_, range, id) in ordered {
            let end = range.end.min(owners.len());
            let start = range.start.min(end);
            for slot in &mut owners[start..end] {
                *slot = Some(id);
            }
        }
        owners
    }
}

struct Highlighter {
    grammars: HashMap<CodeLanguage, Grammar>,
}

impl Highlighter {
    fn load() -> Self {
        let mut grammars = HashMap::new();
        for language in CodeLanguage::ALL {
            match Grammar::compile(language) {
                Ok(grammar) => {
                    grammars.insert(language, grammar);
                }
                Err(err) => error!(%language, error = %err, "failed to load highlight grammar"),
            }
        }
        Self { grammars }
    }

    fn render(&self, code: &str, language: CodeLanguage) -> Result<String, RenderError> {
        let grammar = self
            .grammars
            .get(&language)
            .ok_or(RenderError::GrammarUnavailable(language))?;
        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language)
            .map_err(|_| RenderError::GrammarUnavailable(language))?;
        let tree = parser
            .parse(code, None)
            .ok_or(RenderError::ParseFailed(language))?;
        let owners = grammar.paint(code, &tree);

        let mut out = String::with_capacity(code.len() * 4 + 64);
        out.push_str(r#"<pre class="hl" data-lang=""#);
        out.push_str(language.as_str());
        out.push_str(r#""><code>"#);
        let mut offset = 0;
        for line in code_lines(code) {
            out.push_str(r#"<span class="line">"#);
            let line_owners = owners.get(offset..offset + line.len()).unwrap_or(&[]);
            write_tokens(line, line_owners, &mut out);
            out.push_str("</span>\n");
            offset += line.len() + 1;
        }
        out.push_str("</code></pre>");
        Ok(out)
    }
}

//
// ─── MARKUP ────────────────────────────────────────────────────────────────────
//

/// Lines as a `<pre>` shows them: no phantom line after a trailing newline.
fn code_lines(code: &str) -> impl Iterator<Item = &str> {
    code.strip_suffix('\n')
        .unwrap_or(code)
        .split('\n')
        .take(line_count(code))
}

fn write_tokens(line: &str, owners: &[Option<HighlightId>], out: &mut String) {
    let owner_at = |idx: usize| owners.get(idx).copied().flatten();
    let mut run_start = 0;
    let mut run_owner = owner_at(0);
    for (idx, _) in line.char_indices().skip(1) {
        let owner = owner_at(idx);
        if owner != run_owner {
            write_run(&line[run_start..idx], run_owner, out);
            run_start = idx;
            run_owner = owner;
        }
    }
    if run_start < line.len() {
        write_run(&line[run_start..], run_owner, out);
    }
}

fn write_run(text: &str, owner: Option<HighlightId>, out: &mut String) {
    let Some(id) = owner else {
        escape_into(text, out);
        return;
    };
    let colors = theme_colors(id);
    out.push_str(&format!(
        r#"<span class="{}" style="--hl-light:{};--hl-dark:{}">"#,
        theme::class_name(id),
        colors.light,
        colors.dark
    ));
    escape_into(text, out);
    out.push_str("</span>");
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_spans(html: &str) -> usize {
        html.matches(r#"<span class="line">"#).count()
    }

    #[test]
    fn tsx_sample_gets_one_span_per_line() {
        let service = HighlightService::default();
        let code = "const [count, setCount] = useState(0);\nfunction Counter() {\n  return <div>{count}</div>;\n}";
        let html = service.highlight(code, "tsx").unwrap();
        assert!(html.starts_with(r#"<pre class="hl" data-lang="tsx"><code>"#));
        assert!(html.ends_with("</code></pre>"));
        assert_eq!(line_spans(&html), 4);
        assert!(html.contains(r#"<span class="hl-keyword""#));
        assert!(html.contains("--hl-light:#cf222e;--hl-dark:#ff7b72"));
    }

    #[test]
    fn markup_in_source_is_escaped() {
        let service = HighlightService::default();
        let html = service
            .highlight(r#"const ok = a && b < c ? "<b>" : '>';"#, "tsx")
            .unwrap();
        assert!(html.contains("&amp;&amp;"));
        assert!(html.contains("&lt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let service = HighlightService::default();
        let html = service.highlight("let a = 1;\n", "ts").unwrap();
        assert_eq!(line_spans(&html), 1);
        let empty = service.highlight("", "ts").unwrap();
        assert_eq!(empty, r#"<pre class="hl" data-lang="typescript"><code></code></pre>"#);
    }

    #[test]
    fn non_ascii_text_survives() {
        let service = HighlightService::default();
        let html = service.highlight("const s = \"héllo ✓\";", "js").unwrap();
        assert!(html.contains("héllo ✓"));
    }

    #[test]
    fn every_language_renders() {
        let service = HighlightService::default();
        let samples = [
            ("tsx", "export const A = () => <a href=\"/\">x</a>;"),
            ("typescript", "let total: number = 1;"),
            ("javascript", "function add(a, b) { return a + b; }"),
            ("css", ".card { color: red; }"),
            ("html", "<div class=\"card\">hi</div>"),
        ];
        for (language, code) in samples {
            let html = service.highlight(code, language).unwrap();
            assert_eq!(line_spans(&html), 1, "{language}");
            assert!(html.contains("class=\"hl-"), "{language} produced no tokens");
        }
    }

    #[test]
    fn invalid_syntax_still_renders() {
        let service = HighlightService::default();
        let html = service.highlight("function ( {", "tsx").unwrap();
        assert_eq!(line_spans(&html), 1);
    }

    #[test]
    fn grammars_compile_once_on_first_use() {
        let service = HighlightService::default();
        assert!(!service.is_initialized());
        let _ = service.highlight("let a;", "tsx").unwrap();
        assert!(service.is_initialized());
    }

    #[test]
    fn unsupported_language_is_a_render_error() {
        let service = HighlightService::default();
        let err = service.highlight("x := 1", "go").unwrap_err();
        assert_eq!(err, RenderError::UnsupportedLanguage("go".to_owned()));
        assert!(!service.is_initialized());
    }

    #[test]
    fn oversized_source_is_rejected() {
        let service = HighlightService::new(HighlightConfig { max_source_bytes: 8 });
        let err = service.highlight("const value = 1;", "tsx").unwrap_err();
        assert_eq!(err, RenderError::SourceTooLarge { len: 16, max: 8 });
    }

    #[test]
    fn failures_degrade_to_plain_text() {
        let service = HighlightService::default();
        let rendered = service.highlight_or_plain("fn main() { a < b }\n", "rust");
        assert!(!rendered.highlighted);
        assert_eq!(
            rendered.html,
            r#"<pre class="hl hl--plain" data-lang="rust"><code><span class="line">fn main() { a &lt; b }</span>
</code></pre>"#
        );
    }

    #[test]
    fn plain_rendering_escapes_the_language_tag() {
        let html = render_plain("a", r#""><script>"#);
        assert!(!html.contains("<script>"));
    }
}
