use dioxus::prelude::*;
use prep_core::model::TopicIcon;

/// Interface glyphs that are not tied to content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Bookmark,
    CheckCircle,
    Eye,
    EyeOff,
    ArrowLeft,
    Lightbulb,
    Sparkles,
    BookOpen,
}

fn topic_icon_paths(icon: TopicIcon) -> &'static [&'static str] {
    match icon {
        TopicIcon::Anchor => &[
            "M12 22V8",
            "M5 12H2a10 10 0 0 0 20 0h-3",
            "M15 5a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
        ],
        TopicIcon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        TopicIcon::Layout => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M3 9h18",
            "M9 21V9",
        ],
        TopicIcon::Atom => &[
            "M13 12a1 1 0 1 1-2 0 1 1 0 0 1 2 0",
            "M20.2 20.2c2.04-2.03.02-7.36-4.5-11.9-4.54-4.52-9.87-6.54-11.9-4.5-2.04 2.03-.02 7.36 4.5 11.9 4.54 4.52 9.87 6.54 11.9 4.5Z",
            "M15.7 15.7c4.52-4.54 6.54-9.87 4.5-11.9-2.03-2.04-7.36-.02-11.9 4.5-4.52 4.54-6.54 9.87-4.5 11.9 2.03 2.04 7.36.02 11.9-4.5Z",
        ],
        TopicIcon::HelpCircle => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
            "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
            "M12 17h.01",
        ],
    }
}

fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Bookmark => &["m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z"],
        Glyph::CheckCircle => &[
            "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0",
            "m9 12 2 2 4-4",
        ],
        Glyph::Eye => &[
            "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
            "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0",
        ],
        Glyph::EyeOff => &[
            "M9.88 9.88a3 3 0 1 0 4.24 4.24",
            "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
            "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
            "M2 2l20 20",
        ],
        Glyph::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
        Glyph::Lightbulb => &[
            "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
            "M9 18h6",
            "M10 22h4",
        ],
        Glyph::Sparkles => &[
            "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
        ],
        Glyph::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
    }
}

#[component]
fn Svg(paths: &'static [&'static str], class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in paths.iter() {
                path { d: *d }
            }
        }
    }
}

#[component]
pub fn TopicIconSvg(icon: TopicIcon, #[props(default)] class: String) -> Element {
    rsx! {
        Svg { paths: topic_icon_paths(icon), class }
    }
}

#[component]
pub fn GlyphSvg(glyph: Glyph, #[props(default)] class: String) -> Element {
    rsx! {
        Svg { paths: glyph_paths(glyph), class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_icon_has_paths() {
        for icon in [
            TopicIcon::Anchor,
            TopicIcon::Zap,
            TopicIcon::Layout,
            TopicIcon::Atom,
            TopicIcon::HelpCircle,
        ] {
            assert!(!topic_icon_paths(icon).is_empty(), "{}", icon.name());
        }
    }
}
