use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const STYLE: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLE }
        document::Title { "React Prep" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! { FatalError { report: format!("{errors:?}") } },
            Router::<Route> {}
        }
    }
}

/// Shown instead of the router when a view panics or returns an error.
#[component]
fn FatalError(report: String) -> Element {
    rsx! {
        div { class: "fatal",
            h1 { "React Prep hit an unexpected error" }
            p { "Your progress is stored locally and is safe. Restart the app to continue." }
            details {
                summary { "Details" }
                pre { "{report}" }
            }
        }
    }
}
