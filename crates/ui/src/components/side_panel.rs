use dioxus::prelude::*;

use crate::components::{Glyph, GlyphSvg};
use crate::vm::markdown_to_html;

/// What a side panel next to the code shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelContent {
    Hints(Vec<String>),
    Tips(Vec<String>),
    /// Markdown source.
    Explanation(String),
}

impl PanelContent {
    fn is_empty(&self) -> bool {
        match self {
            Self::Hints(items) | Self::Tips(items) => items.is_empty(),
            Self::Explanation(text) => text.trim().is_empty(),
        }
    }
}

/// Renders nothing when there is nothing to show.
#[component]
pub fn SidePanel(content: PanelContent) -> Element {
    if content.is_empty() {
        return rsx! {};
    }

    match content {
        PanelContent::Hints(hints) => rsx! {
            section { class: "side-panel side-panel--hints",
                h3 { GlyphSvg { glyph: Glyph::Lightbulb } "Hints" }
                ol {
                    for hint in hints {
                        li { "{hint}" }
                    }
                }
            }
        },
        PanelContent::Tips(tips) => rsx! {
            section { class: "side-panel side-panel--tips",
                h3 { GlyphSvg { glyph: Glyph::Sparkles } "Pro Tips" }
                ul {
                    for tip in tips {
                        li { "{tip}" }
                    }
                }
            }
        },
        PanelContent::Explanation(markdown) => {
            let html = markdown_to_html(&markdown);
            rsx! {
                section { class: "side-panel side-panel--explanation",
                    h3 { GlyphSvg { glyph: Glyph::BookOpen } "Explanation" }
                    div { class: "prose", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}
