use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::TopicIconSvg;
use crate::routes::Route;
use crate::vm::SidebarItemVm;

#[component]
pub fn Sidebar(items: Vec<SidebarItemVm>, all_topics_active: bool) -> Element {
    rsx! {
        nav { class: "sidebar",
            Link { class: "sidebar__brand", to: Route::Home {}, "React Prep" }
            ul {
                li {
                    Link {
                        class: if all_topics_active { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                        to: Route::Topics {},
                        "All Topics"
                    }
                }
                for item in items {
                    li { key: "{item.slug}",
                        Link {
                            class: if item.active { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                            to: Route::Topic { slug: item.slug.clone() },
                            TopicIconSvg { icon: item.icon }
                            "{item.name}"
                        }
                    }
                }
            }
        }
    }
}
