use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFoundPanel { title: "Page not found", detail: "Nothing lives at {path}." }
    }
}

#[component]
pub fn NotFoundPanel(
    title: String,
    #[props(default = "It may have moved, or the link is mistyped.".to_string())] detail: String,
) -> Element {
    rsx! {
        div { class: "page page--not-found",
            h1 { "{title}" }
            p { "{detail}" }
            Link { class: "btn-primary", to: Route::Topics {}, "Browse topics" }
        }
    }
}
