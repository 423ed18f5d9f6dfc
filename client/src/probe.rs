use shared::{config::Routes, types::SessionState};
use tracing::{debug, info, warn};

use crate::{
    api::{ApiError, Backend},
    navigation::Navigator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated,
    RedirectToLogin,
    /// Neither success nor 401. The gate stays on the loading indicator.
    KeepProbing,
}

/// Pure mapping from a liveness answer to the transition it causes.
pub fn classify(result: &Result<(), ApiError>) -> ProbeOutcome {
    match result {
        Ok(()) => ProbeOutcome::Authenticated,
        Err(ApiError::Unauthorized) => ProbeOutcome::RedirectToLogin,
        Err(_) => ProbeOutcome::KeepProbing,
    }
}

/// Session state of one mounted gate, plus the sentinel that keeps the
/// liveness check from being issued more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    state: SessionState,
    started: bool,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns `true` exactly once; every later call means the check is
    /// already in flight or done and must not be issued again.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn settle(&mut self, outcome: ProbeOutcome) -> SessionState {
        if self.state == SessionState::Probing {
            match outcome {
                ProbeOutcome::Authenticated => self.state = SessionState::Authenticated,
                ProbeOutcome::RedirectToLogin => self.state = SessionState::Unauthenticated,
                ProbeOutcome::KeepProbing => {}
            }
        }
        self.state
    }
}

pub fn follow(outcome: ProbeOutcome, navigator: &impl Navigator, routes: &Routes) {
    if outcome == ProbeOutcome::RedirectToLogin {
        navigator.replace(routes.login);
    }
}

/// Issues the liveness check and performs the redirect a 401 calls for.
pub async fn check_session(
    backend: &impl Backend,
    navigator: &impl Navigator,
    routes: &Routes,
) -> ProbeOutcome {
    let result = backend.alive().await;
    let outcome = classify(&result);
    match &result {
        Ok(()) => info!("Session is alive"),
        Err(ApiError::Unauthorized) => info!("No valid session, redirecting to {}", routes.login),
        Err(err) => warn!("Liveness check failed, staying on the loading screen: {err}"),
    }
    follow(outcome, navigator, routes);
    outcome
}

/// The gate's mount effect. `begin` consults the sentinel and `settle` stores
/// the outcome; the check is skipped entirely when `begin` says it already ran.
pub async fn mount_once(
    begin: impl FnOnce() -> bool,
    settle: impl FnOnce(ProbeOutcome),
    backend: &impl Backend,
    navigator: &impl Navigator,
    routes: &Routes,
) -> Option<ProbeOutcome> {
    if !begin() {
        debug!("Session check already issued, skipping");
        return None;
    }
    let outcome = check_session(backend, navigator, routes).await;
    settle(outcome);
    Some(outcome)
}
