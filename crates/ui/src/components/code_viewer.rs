use dioxus::prelude::*;

use crate::vm::MistakeMarkerVm;

/// A rendered code block with an optional layer of mistake markers.
///
/// `.code-viewer__body` must keep the 24px line height and 16px top padding
/// that `LineMetrics::CODE_BLOCK` assumes.
#[component]
pub fn CodeViewer(
    html: String,
    #[props(default = "tsx".to_string())] language: String,
    #[props(default)] markers: Vec<MistakeMarkerVm>,
    #[props(default)] show_mistakes: bool,
) -> Element {
    rsx! {
        div { class: "code-viewer",
            div { class: "code-viewer__header",
                span { class: "code-viewer__lang", "{language}" }
            }
            div { class: "code-viewer__body",
                div { class: "code-viewer__code", dangerous_inner_html: "{html}" }
                if show_mistakes {
                    for marker in markers {
                        MistakeMarker { key: "{marker.id}", marker }
                    }
                }
            }
        }
    }
}

#[component]
fn MistakeMarker(marker: MistakeMarkerVm) -> Element {
    let outside = if marker.within_code { "" } else { " mistake--outside" };
    rsx! {
        div {
            class: "mistake {marker.severity_class}{outside}",
            style: "{marker.style}",
            "data-line": "{marker.line}",
            div { class: "mistake__tooltip",
                div { class: "mistake__heading",
                    span { class: "mistake__severity", "{marker.severity_label}" }
                    span { "Line {marker.line}" }
                }
                "{marker.message}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> MistakeMarkerVm {
        MistakeMarkerVm {
            id: "m1".into(),
            line: 1,
            severity_label: "ERROR".into(),
            severity_class: "mistake--error",
            message: "Stale closure.".into(),
            style: "top: 16px; height: 24px;".into(),
            within_code: true,
        }
    }

    #[component]
    fn Harness(
        show_mistakes: bool,
        #[props(default)] markers: Option<Vec<MistakeMarkerVm>>,
    ) -> Element {
        rsx! {
            CodeViewer {
                html: "<pre><code>let a = 1;</code></pre>".to_string(),
                markers: markers.unwrap_or_else(|| vec![marker()]),
                show_mistakes,
            }
        }
    }

    fn render_with(markers: Vec<MistakeMarkerVm>) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                show_mistakes: true,
                markers: Some(markers),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render(show_mistakes: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                show_mistakes,
                markers: None,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn markers_render_with_position_and_tooltip() {
        let html = render(true);
        assert!(html.contains("top: 16px; height: 24px;"), "{html}");
        assert!(html.contains("ERROR"), "{html}");
        assert!(html.contains("Line 1"), "{html}");
        assert!(html.contains("Stale closure."), "{html}");
        assert!(html.contains("let a = 1;"), "{html}");
    }

    #[test]
    fn hidden_markers_are_not_rendered() {
        let html = render(false);
        assert!(!html.contains("mistake__tooltip"), "{html}");
        assert!(html.contains("let a = 1;"), "{html}");
    }

    #[test]
    fn markers_past_the_last_line_are_styled_apart() {
        let past_end = MistakeMarkerVm {
            id: "m9".into(),
            line: 9,
            within_code: false,
            style: "top: 208px; height: 24px;".into(),
            ..marker()
        };
        let html = render_with(vec![marker(), past_end]);
        assert_eq!(html.matches("mistake--outside").count(), 1, "{html}");
        assert!(html.contains(r#"data-line="9""#), "{html}");

        let stylesheet = include_str!("../../assets/style.css");
        assert!(stylesheet.contains(".mistake--outside {"));
    }
}
