use dioxus::prelude::*;
use dioxus_router::Link;
use services::QuestionBankError;
use tracing::warn;

use crate::components::{Glyph, GlyphSvg, QuestionList};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::NotFoundPanel;

#[component]
pub fn TopicView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();

    let page = match ctx.question_bank().topic_page(&slug) {
        Ok(page) => page,
        Err(QuestionBankError::NotFound(_)) => {
            return rsx! { NotFoundPanel { title: "Topic not found" } };
        }
        Err(err) => {
            warn!(%slug, error = %err, "topic page failed to load");
            return rsx! { NotFoundPanel { title: "Topic not found" } };
        }
    };
    let topic = page.topic;

    rsx! {
        document::Title { "{topic.name()} | React Prep" }
        div { class: "page page--topic",
            Link { class: "back-link", to: Route::Topics {},
                GlyphSvg { glyph: Glyph::ArrowLeft }
                "Back to Topics"
            }
            header { class: "page__header",
                h1 { "{topic.name()}" }
                p { class: "page__lead", "{topic.description()}" }
            }
            QuestionList { key: "{slug}", questions: page.questions }
        }
    }
}
