//! Capture names the highlighter understands and the colors they map to.
//!
//! Both GitHub palettes are emitted on every token as CSS variables, so the
//! stylesheet can switch schemes without re-rendering.

/// Tree-sitter capture names, most specific first within each family.
/// Index into this array is the [`HighlightId`].
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",
    "boolean",
    "comment",
    "constant",
    "constant.builtin",
    "constructor",
    "escape",
    "function",
    "function.builtin",
    "function.method",
    "keyword",
    "number",
    "operator",
    "property",
    "punctuation",
    "punctuation.bracket",
    "punctuation.delimiter",
    "punctuation.special",
    "string",
    "string.special",
    "tag",
    "tag.attribute",
    "type",
    "type.builtin",
    "variable",
    "variable.builtin",
    "variable.parameter",
];

/// Index into [`HIGHLIGHT_NAMES`].
pub type HighlightId = u16;

/// Resolve a capture name, falling back through its dotted parents
/// (`keyword.control.import` -> `keyword.control` -> `keyword`).
#[must_use]
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    let mut current = name;
    loop {
        if let Some(pos) = HIGHLIGHT_NAMES.iter().position(|&n| n == current) {
            return HighlightId::try_from(pos).ok();
        }
        let dot = current.rfind('.')?;
        current = &current[..dot];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub light: &'static str,
    pub dark: &'static str,
}

const fn colors(light: &'static str, dark: &'static str) -> ThemeColors {
    ThemeColors { light, dark }
}

/// GitHub light / GitHub dark colors for a highlight.
#[must_use]
pub fn theme_colors(id: HighlightId) -> ThemeColors {
    let name = HIGHLIGHT_NAMES
        .get(usize::from(id))
        .copied()
        .unwrap_or_default();
    match name {
        "comment" => colors("#6e7781", "#8b949e"),
        "keyword" | "operator" => colors("#cf222e", "#ff7b72"),
        "string" | "string.special" => colors("#0a3069", "#a5d6ff"),
        "escape" => colors("#116329", "#7ee787"),
        "function" | "function.builtin" | "function.method" | "constructor" => {
            colors("#8250df", "#d2a8ff")
        }
        "type" | "type.builtin" | "variable.parameter" => colors("#953800", "#ffa657"),
        "tag" => colors("#116329", "#7ee787"),
        "attribute" | "tag.attribute" | "property" | "constant" | "constant.builtin"
        | "number" | "boolean" | "variable.builtin" => colors("#0550ae", "#79c0ff"),
        _ => colors("#24292f", "#c9d1d9"),
    }
}

/// `hl-punctuation-bracket` for `punctuation.bracket`.
#[must_use]
pub fn class_name(id: HighlightId) -> String {
    let name = HIGHLIGHT_NAMES
        .get(usize::from(id))
        .copied()
        .unwrap_or("text");
    format!("hl-{}", name.replace('.', "-"))
}
