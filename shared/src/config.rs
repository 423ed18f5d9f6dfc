use std::time::Duration;

use crate::texts::{TEXTS_ZH, Texts};

/// Backend paths, all relative to the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub alive: &'static str,
    pub identity: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
}

/// Browser navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    pub login: &'static str,
    pub root: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    pub endpoints: Endpoints,
    pub routes: Routes,
    /// How long the login error banner stays up without interaction.
    pub notification_timeout: Duration,
    /// Id of the element both bundles mount into.
    pub root_element_id: &'static str,
    pub texts: &'static Texts,
}

pub static DEFAULT_CONFIG: GateConfig = GateConfig {
    endpoints: Endpoints {
        alive: "/user/alive",
        identity: "/user/current",
        login: "/user/login",
        logout: "/user/logout",
    },
    routes: Routes {
        login: "/login",
        root: "/",
    },
    notification_timeout: Duration::from_millis(3000),
    root_element_id: "main",
    texts: &TEXTS_ZH,
};

impl Default for GateConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl GateConfig {
    pub fn with_texts(mut self, texts: &'static Texts) -> Self {
        self.texts = texts;
        self
    }

    /// Older backends expose the identity under `/user/info` instead of `/user/current`.
    pub fn with_identity_endpoint(mut self, path: &'static str) -> Self {
        self.endpoints.identity = path;
        self
    }

    pub fn with_root_element_id(mut self, id: &'static str) -> Self {
        self.root_element_id = id;
        self
    }
}
