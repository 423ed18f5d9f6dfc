use client::{identity, navigation::BrowserNavigator};
use dioxus::prelude::*;
use shared::{config::GateConfig, types::UserIdentity};

use crate::use_backend;

/// Shown once the session is known to be valid. Does not re-check it.
#[component]
pub fn AuthenticatedView() -> Element {
    let config = use_context::<GateConfig>();
    let backend = use_backend();
    let mut user: Signal<Option<UserIdentity>> = use_signal(|| None);

    let fetch_backend = backend.clone();
    use_future(move || {
        let backend = fetch_backend.clone();
        async move {
            let Some(backend) = backend else {
                return;
            };
            identity::load_identity(&backend, &BrowserNavigator, &config.routes, |identity| {
                user.set(Some(identity));
            })
            .await;
        }
    });

    let display_name = identity::display_label(user.read().as_ref()).to_owned();

    rsx! {
        document::Title { "{config.texts.app_title}" }
        span {
            UserInfoBar {
                display_name,
                on_logout: move |_| {
                    let Some(backend) = backend.clone() else {
                        return;
                    };
                    spawn(async move {
                        identity::logout(&backend, &BrowserNavigator, &config.routes).await;
                    });
                },
            }
        }
    }
}

#[component]
pub fn UserInfoBar(display_name: String, on_logout: EventHandler<()>) -> Element {
    let config = use_context::<GateConfig>();
    rsx! {
        header {
            class: "app-bar",
            h6 {
                id: "alias",
                class: "app-bar-title",
                "{display_name}"
            }
            button {
                class: "app-bar-action",
                onclick: move |_| on_logout.call(()),
                "{config.texts.logout_button}"
            }
        }
    }
}
