//! Entry points of the two bundles. The app bundle and the login bundle are
//! separate binaries that share nothing at runtime.

use client::navigation;
use dioxus::{
    logger::tracing::{Level, info},
    prelude::*,
};
use shared::{
    config::{DEFAULT_CONFIG, GateConfig},
    texts::Texts,
};
use ui::{LoginView, SessionProbe};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Which screen a bundle starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    App,
    Login,
}

/// The element a bundle renders into. Owned by whoever launches the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHandle {
    element_id: String,
}

impl RootHandle {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

impl From<&GateConfig> for RootHandle {
    fn from(config: &GateConfig) -> Self {
        Self::new(config.root_element_id)
    }
}

/// Configuration for the current page: defaults plus the locale table picked
/// from the document's `lang` attribute.
pub fn page_config() -> GateConfig {
    match navigation::page_language() {
        Some(lang) => DEFAULT_CONFIG.with_texts(Texts::for_locale(&lang)),
        None => DEFAULT_CONFIG,
    }
}

fn init_logging() {
    #[cfg(debug_assertions)]
    let level = Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = Level::INFO;

    // Fails only when a subscriber is already installed.
    dioxus::logger::init(level).ok();
}

pub fn bootstrap(root: RootHandle, entry: Entry, config: GateConfig) {
    init_logging();
    info!("Starting {entry:?} bundle in #{}", root.element_id());

    let builder = dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(root.element_id))
        .with_context(config);
    match entry {
        Entry::App => builder.launch(AppRoot),
        Entry::Login => builder.launch(LoginRoot),
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProbe {}
    }
}

#[component]
fn LoginRoot() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        LoginView {}
    }
}
