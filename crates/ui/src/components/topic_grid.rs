use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::{ProgressBar, TopicIconSvg};
use crate::routes::Route;
use crate::vm::TopicCardVm;

#[component]
pub fn TopicGrid(cards: Vec<TopicCardVm>) -> Element {
    rsx! {
        div { class: "topic-grid",
            for card in cards {
                TopicCard { key: "{card.slug}", card }
            }
        }
    }
}

#[component]
fn TopicCard(card: TopicCardVm) -> Element {
    let percent = card.progress.percent;
    rsx! {
        Link { class: "topic-card", to: Route::Topic { slug: card.slug.clone() },
            div { class: "topic-card__icon",
                TopicIconSvg { icon: card.icon }
            }
            h3 { "{card.name}" }
            p { class: "topic-card__description", "{card.description}" }
            div { class: "topic-card__progress",
                div { class: "topic-card__progress-label",
                    span { "Progress" }
                    span { "{percent}%" }
                }
                ProgressBar { percent }
            }
        }
    }
}
