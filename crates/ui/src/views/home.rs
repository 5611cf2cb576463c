use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::ProgressBar;
use crate::context::AppContext;
use crate::progress::use_progress;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();
    let overall = ctx.question_bank().overall_progress(&progress.state());

    rsx! {
        div { class: "page page--home",
            section { class: "hero",
                h1 { "Master React interviews, one pitfall at a time." }
                p {
                    "Spot the mistake in real-world snippets, reveal the annotated lines, "
                    "then compare against an idiomatic solution."
                }
                Link { class: "btn-primary", to: Route::Topics {}, "Browse topics" }
            }
            section { class: "overall-progress",
                h2 { "Your progress" }
                p { "{overall.completed} of {overall.total} questions completed" }
                ProgressBar { percent: overall.percent }
            }
        }
    }
}
