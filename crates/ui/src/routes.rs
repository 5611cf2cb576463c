use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use crate::components::{Breadcrumbs, Sidebar};
use crate::context::AppContext;
use crate::progress::use_progress_provider;
use crate::views::{HomeView, NotFoundView, TopicView, TopicsView};
use crate::vm::{map_breadcrumbs, map_sidebar_items};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/topics", TopicsView)] Topics {},
        #[route("/topics/:slug", TopicView)] Topic { slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    use_progress_provider(ctx.progress_store());
    let route = use_route::<Route>();

    let bank = ctx.question_bank();
    let active_slug = match &route {
        Route::Topic { slug } => Some(slug.as_str()),
        _ => None,
    };
    let items = map_sidebar_items(bank.topics(), active_slug);
    let crumbs = map_breadcrumbs(&route.to_string(), bank.topics());
    let all_topics_active = matches!(route, Route::Topics {});

    rsx! {
        div { class: "app",
            Sidebar { items, all_topics_active }
            div { class: "content",
                header { class: "content__header",
                    Breadcrumbs { crumbs }
                }
                main { class: "content__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
