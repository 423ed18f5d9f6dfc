use dioxus::prelude::*;
use shared::config::GateConfig;

#[component]
pub fn LoadingIndicator() -> Element {
    let config = use_context::<GateConfig>();
    rsx! {
        div {
            class: "screen-center",
            div {
                class: "progress-spinner",
                role: "progressbar",
                aria_label: config.texts.loading_label,
            }
        }
    }
}
