use dioxus::prelude::*;
use prep_core::model::Difficulty;

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> Element {
    let modifier = match difficulty {
        Difficulty::Easy => "badge--easy",
        Difficulty::Medium => "badge--medium",
        Difficulty::Hard => "badge--hard",
    };
    rsx! {
        span { class: "badge {modifier}", "{difficulty}" }
    }
}
