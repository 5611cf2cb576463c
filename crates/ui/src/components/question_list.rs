use std::sync::Arc;

use dioxus::prelude::*;
use services::HighlightedQuestion;

use crate::components::QuestionCard;
use crate::vm::{DifficultyFilter, EMPTY_FILTER_MESSAGE, filter_questions, questions_heading};

#[component]
pub fn QuestionList(questions: Arc<[HighlightedQuestion]>) -> Element {
    let mut filter = use_signal(DifficultyFilter::default);
    let active = filter();
    let visible = filter_questions(&questions, active);

    rsx! {
        section { class: "question-list",
            div { class: "question-list__header",
                h2 { "{questions_heading(visible.len())}" }
                div { class: "tabs", role: "tablist",
                    for option in DifficultyFilter::TABS {
                        button {
                            key: "{option.label()}",
                            class: if option == active { "tab tab--active" } else { "tab" },
                            role: "tab",
                            onclick: move |_| filter.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "{EMPTY_FILTER_MESSAGE}" }
            } else {
                for item in visible {
                    QuestionCard { key: "{item.question.id()}", item }
                }
            }
        }
    }
}
