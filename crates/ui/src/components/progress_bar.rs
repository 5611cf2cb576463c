use dioxus::prelude::*;

#[component]
pub fn ProgressBar(percent: u8) -> Element {
    let percent = percent.min(100);
    rsx! {
        div {
            class: "progress-bar",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            div { class: "progress-bar__fill", style: "width: {percent}%;" }
        }
    }
}
