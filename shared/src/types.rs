use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the liveness check, owned by the app bundle's root view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Probing,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(rename = "aliasName")]
    pub display_name: String,
}

/// The identity endpoint answers either with the bare user object or with the
/// backend's `{ status, message, data }` envelope around it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdentityPayload {
    Enveloped { data: UserIdentity },
    Bare(UserIdentity),
}

impl From<IdentityPayload> for UserIdentity {
    fn from(payload: IdentityPayload) -> Self {
        match payload {
            IdentityPayload::Enveloped { data } => data,
            IdentityPayload::Bare(identity) => identity,
        }
    }
}

/// Credentials as they were in the form at the moment of submission.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFormInput {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginFormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Serializes as `{}`, the body of every call that carries no payload.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}
