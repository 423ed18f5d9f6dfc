use client::{
    api::HttpBackend,
    login::{self, LoginForm, LoginOutcome},
    navigation::BrowserNavigator,
    notification::{self, CloseReason, NotificationState},
};
use dioxus::{logger::tracing::debug, prelude::*};
use shared::{config::GateConfig, types::LoginFormInput};

use crate::{ErrorNotification, use_backend};

/// Reads the fields out of the submitted form. Nothing is sampled before this.
fn snapshot(event: &FormEvent) -> LoginFormInput {
    let field = |name: &str| match event.get_first(name) {
        Some(FormValue::Text(value)) => value,
        _ => String::new(),
    };
    LoginFormInput {
        username: field("username"),
        password: field("password"),
    }
}

async fn user_login(
    input: LoginFormInput,
    backend: HttpBackend,
    config: GateConfig,
    mut form: Signal<LoginForm>,
    mut banner: Signal<NotificationState>,
) {
    if !form.write().begin_submit() {
        debug!("Login already in flight, ignoring submit");
        return;
    }

    let outcome = login::submit(&backend, &BrowserNavigator, &config.routes, &input).await;
    form.write().finish(outcome);

    if outcome == LoginOutcome::ShowError {
        let ticket = banner.write().show();
        spawn(notification::expire_after(
            config.notification_timeout,
            ticket,
            move |ticket| {
                if banner.write().expire(ticket) {
                    form.write().error_dismissed();
                }
            },
        ));
    }
}

/// Root of the login bundle.
#[component]
pub fn LoginView() -> Element {
    let config = use_context::<GateConfig>();
    let texts = config.texts;
    let backend = use_backend();
    let mut form = use_signal(LoginForm::default);
    let mut banner = use_signal(NotificationState::default);

    let mut close_banner = move |reason: CloseReason| {
        if banner.write().close(reason) {
            form.write().error_dismissed();
        }
    };

    rsx! {
        document::Title { "{texts.login_title}" }
        span {
            class: "page",
            tabindex: -1,
            onclick: move |_| close_banner(CloseReason::Clickaway),
            onkeydown: move |event| {
                if event.key() == Key::Escape {
                    close_banner(CloseReason::EscapeKeyDown);
                }
            },
            div {
                class: "screen-center",
                form {
                    class: "form-control",
                    onsubmit: move |event| {
                        event.prevent_default();
                        let Some(backend) = backend.clone() else {
                            return;
                        };
                        spawn(user_login(snapshot(&event), backend, config, form, banner));
                    },
                    label {
                        class: "text-field",
                        span { class: "text-field-label", "{texts.username_label}" }
                        input { id: "username", name: "username", autocomplete: "username" }
                    }
                    label {
                        class: "text-field text-field-dense",
                        span { class: "text-field-label", "{texts.password_label}" }
                        input {
                            id: "password",
                            name: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                        }
                    }
                    button {
                        class: "button-contained",
                        r#type: "submit",
                        disabled: form.read().is_submitting(),
                        "{texts.login_button}"
                    }
                }
            }
            ErrorNotification {
                visible: banner.read().is_visible(),
                message: texts.login_failed.to_owned(),
                on_close: move |reason| close_banner(reason),
            }
        }
    }
}
