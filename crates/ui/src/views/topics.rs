use dioxus::prelude::*;

use crate::components::TopicGrid;
use crate::context::AppContext;
use crate::progress::use_progress;
use crate::vm::map_topic_cards;

#[component]
pub fn TopicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();
    let bank = ctx.question_bank();
    let rows = bank.topic_progress(&progress.state());
    let cards = map_topic_cards(bank.topics(), &rows);

    rsx! {
        document::Title { "Topics | React Prep" }
        div { class: "page",
            h1 { "Topics" }
            p { class: "page__lead", "Pick a topic to start practicing." }
            TopicGrid { cards }
        }
    }
}
