use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::CrumbVm;

#[component]
pub fn Breadcrumbs(crumbs: Vec<CrumbVm>) -> Element {
    rsx! {
        nav { class: "breadcrumbs", "aria-label": "Breadcrumb",
            ol {
                for (index, crumb) in crumbs.into_iter().enumerate() {
                    li { key: "{index}",
                        if index > 0 {
                            span { class: "breadcrumbs__separator", "/" }
                        }
                        match crumb.href.as_deref().and_then(|href| href.parse::<Route>().ok()) {
                            Some(route) => rsx! {
                                Link { to: route, "{crumb.label}" }
                            },
                            None => rsx! {
                                span { class: "breadcrumbs__current", "aria-current": "page", "{crumb.label}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
