use dioxus::prelude::*;
use prep_core::LineMetrics;
use services::HighlightedQuestion;

use crate::components::{
    CodeViewer, DifficultyBadge, Glyph, GlyphSvg, PanelContent, SidePanel,
};
use crate::progress::use_progress;
use crate::vm::{CodeTab, completion_label, map_mistake_markers, mistake_toggle_label};

#[component]
pub fn QuestionCard(item: HighlightedQuestion) -> Element {
    let progress = use_progress();
    let mut tab = use_signal(CodeTab::default);
    let mut show_mistakes = use_signal(|| false);

    let question = &item.question;
    let id = question.id().clone();
    let completed = progress.is_completed(&id);
    let saved = progress.is_saved(&id);
    let active_tab = tab();
    let showing_mistakes = show_mistakes();
    let toggle_glyph = if showing_mistakes { Glyph::EyeOff } else { Glyph::Eye };
    let markers = map_mistake_markers(question, LineMetrics::CODE_BLOCK);
    let code_html = match active_tab {
        CodeTab::Problem => item.preview.html.clone(),
        CodeTab::Solution => item.solution.html.clone(),
    };

    let save_progress = progress.clone();
    let save_id = id.clone();
    let done_progress = progress.clone();
    let done_id = id.clone();

    rsx! {
        article { class: "question-card", id: "{question.slug()}",
            header { class: "question-card__header",
                div { class: "question-card__titles",
                    div { class: "question-card__title-row",
                        DifficultyBadge { difficulty: question.difficulty() }
                        h2 { "{question.title()}" }
                    }
                    p { class: "question-card__description", "{question.description()}" }
                }
                div { class: "question-card__actions",
                    button {
                        class: if saved { "btn-icon btn-icon--saved" } else { "btn-icon" },
                        title: if saved { "Saved" } else { "Save" },
                        "aria-pressed": "{saved}",
                        onclick: move |_| save_progress.toggle_saved(save_id.clone()),
                        GlyphSvg { glyph: Glyph::Bookmark }
                    }
                    button {
                        class: if completed { "btn-done btn-done--completed" } else { "btn-done" },
                        "aria-pressed": "{completed}",
                        onclick: move |_| done_progress.toggle_completed(done_id.clone()),
                        GlyphSvg { glyph: Glyph::CheckCircle }
                        "{completion_label(completed)}"
                    }
                }
            }

            div { class: "question-card__body",
                div { class: "question-card__code",
                    div { class: "question-card__toolbar",
                        div { class: "tabs", role: "tablist",
                            button {
                                class: if active_tab == CodeTab::Problem { "tab tab--active" } else { "tab" },
                                role: "tab",
                                onclick: move |_| tab.set(CodeTab::Problem),
                                "Problem"
                            }
                            button {
                                class: if active_tab == CodeTab::Solution { "tab tab--active" } else { "tab" },
                                role: "tab",
                                onclick: move |_| tab.set(CodeTab::Solution),
                                "Solution"
                            }
                        }
                        if active_tab == CodeTab::Problem {
                            button {
                                class: "btn-link",
                                onclick: move |_| {
                                    let next = !show_mistakes();
                                    show_mistakes.set(next);
                                },
                                GlyphSvg { glyph: toggle_glyph }
                                "{mistake_toggle_label(showing_mistakes)}"
                            }
                        }
                    }
                    CodeViewer {
                        html: code_html,
                        markers,
                        show_mistakes: active_tab == CodeTab::Problem && showing_mistakes,
                    }
                }

                aside { class: "question-card__panels",
                    match active_tab {
                        CodeTab::Problem => rsx! {
                            SidePanel { content: PanelContent::Hints(question.hints().to_vec()) }
                        },
                        CodeTab::Solution => rsx! {
                            SidePanel { content: PanelContent::Explanation(question.explanation().to_owned()) }
                            SidePanel { content: PanelContent::Tips(question.pro_tips().to_vec()) }
                        },
                    }
                }
            }
        }
    }
}
