use client::api::HttpBackend;
use dioxus::{logger::tracing::error, prelude::*};
use shared::config::GateConfig;

/// Backend for the page's own origin, built once per component instance.
/// `None` when no browser window is available; callers then do nothing.
pub fn use_backend() -> Option<HttpBackend> {
    let config = use_context::<GateConfig>();
    use_hook(move || match HttpBackend::for_page(config.endpoints) {
        Ok(backend) => Some(backend),
        Err(err) => {
            error!("Cannot reach the backend: {err}");
            None
        }
    })
}
