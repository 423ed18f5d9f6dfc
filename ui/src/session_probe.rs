use client::{
    navigation::BrowserNavigator,
    probe::{self, Probe},
};
use dioxus::prelude::*;
use shared::{config::GateConfig, types::SessionState};

use crate::{AuthenticatedView, LoadingIndicator, use_backend};

/// Root of the app bundle. Checks the session once, then either hands over to
/// [`AuthenticatedView`] or leaves the page for the login route.
#[component]
pub fn SessionProbe() -> Element {
    let config = use_context::<GateConfig>();
    let backend = use_backend();
    let mut gate = use_signal(Probe::new);

    use_future(move || {
        let backend = backend.clone();
        async move {
            let Some(backend) = backend else {
                return;
            };
            probe::mount_once(
                move || gate.write().begin(),
                move |outcome| {
                    gate.write().settle(outcome);
                },
                &backend,
                &BrowserNavigator,
                &config.routes,
            )
            .await;
        }
    });

    let state = gate.read().state();
    match state {
        SessionState::Authenticated => rsx! { AuthenticatedView {} },
        SessionState::Probing | SessionState::Unauthenticated => rsx! { LoadingIndicator {} },
    }
}
