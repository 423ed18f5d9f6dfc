use shared::{config::Routes, types::UserIdentity};
use tracing::{info, warn};

use crate::{
    api::{ApiError, Backend},
    navigation::Navigator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityOutcome {
    Loaded(UserIdentity),
    RedirectToLogin,
    /// The name stays blank.
    Unresolved,
}

pub fn classify(result: Result<UserIdentity, ApiError>) -> IdentityOutcome {
    match result {
        Ok(identity) => IdentityOutcome::Loaded(identity),
        Err(ApiError::Unauthorized) => IdentityOutcome::RedirectToLogin,
        Err(_) => IdentityOutcome::Unresolved,
    }
}

/// Text shown in the user bar. Blank until the identity has arrived.
pub fn display_label(identity: Option<&UserIdentity>) -> &str {
    identity.map_or("", |identity| identity.display_name.as_str())
}

/// Fetches the current user once. A 401 here means the session expired
/// between the liveness check and this call, so the user is sent to login.
pub async fn fetch_identity(
    backend: &impl Backend,
    navigator: &impl Navigator,
    routes: &Routes,
) -> Option<UserIdentity> {
    match classify(backend.identity().await) {
        IdentityOutcome::Loaded(identity) => {
            info!("Signed in as '{}'", identity.display_name);
            Some(identity)
        }
        IdentityOutcome::RedirectToLogin => {
            info!("Session expired, redirecting to {}", routes.login);
            navigator.replace(routes.login);
            None
        }
        IdentityOutcome::Unresolved => {
            warn!("Could not load the current user");
            None
        }
    }
}

/// The authenticated view's mount effect: fetch once and hand a loaded
/// identity to `store`.
pub async fn load_identity(
    backend: &impl Backend,
    navigator: &impl Navigator,
    routes: &Routes,
    store: impl FnOnce(UserIdentity),
) {
    if let Some(identity) = fetch_identity(backend, navigator, routes).await {
        store(identity);
    }
}

/// Ends the session. The browser goes to the login page whatever the backend says.
pub async fn logout(backend: &impl Backend, navigator: &impl Navigator, routes: &Routes) {
    if let Err(err) = backend.logout().await {
        warn!("Logout request failed: {err}");
    }
    navigator.replace(routes.login);
}
