use client::notification::CloseReason;
use dioxus::prelude::*;
use shared::config::GateConfig;

/// Error banner pinned to the top of the page. Clicks inside it never count as
/// a click-away; the page that hosts it reports those.
#[component]
pub fn ErrorNotification(
    visible: bool,
    message: String,
    on_close: EventHandler<CloseReason>,
) -> Element {
    let config = use_context::<GateConfig>();

    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "snackbar snackbar-top-center",
            onclick: move |event| event.stop_propagation(),
            div {
                class: "alert alert-error",
                role: "alert",
                span { class: "alert-message", "{message}" }
                button {
                    class: "alert-close",
                    aria_label: config.texts.close_label,
                    title: config.texts.close_label,
                    onclick: move |event| {
                        event.stop_propagation();
                        on_close.call(CloseReason::CloseButton);
                    },
                    "×"
                }
            }
        }
    }
}
