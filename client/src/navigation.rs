#[cfg(target_arch = "wasm32")]
use tracing::error;
#[cfg(not(target_arch = "wasm32"))]
use tracing::warn;

use crate::api::ApiError;

/// Full-document navigation. The current page is replaced, not pushed, so the
/// back button never returns to the gate.
pub trait Navigator {
    fn replace(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn replace(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            error!("Cannot navigate to {path}: no window");
            return;
        };
        if let Err(err) = window.location().replace(path) {
            error!("Failed to navigate to {path}: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn replace(&self, path: &str) {
        warn!("Ignoring navigation to {path} outside of a browser");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Result<String, ApiError> {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .ok_or(ApiError::NoWindow)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Result<String, ApiError> {
    Err(ApiError::NoWindow)
}

/// The `lang` attribute of the document's root element, if any.
#[cfg(target_arch = "wasm32")]
pub fn page_language() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute("lang")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_language() -> Option<String> {
    None
}
