use std::future::Future;

use serde::Serialize;
use shared::{
    config::Endpoints,
    types::{EmptyBody, IdentityPayload, LoginFormInput, UserIdentity},
};
use thiserror::Error;
use tracing::debug;

use crate::navigation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("no browser window available")]
    NoWindow,
}

impl ApiError {
    /// `None` for any 2xx status.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            other => Some(Self::Status(other)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// The four calls the gate makes. Each one is a JSON `POST`.
pub trait Backend {
    fn alive(&self) -> impl Future<Output = Result<(), ApiError>>;

    fn identity(&self) -> impl Future<Output = Result<UserIdentity, ApiError>>;

    fn login(&self, input: &LoginFormInput) -> impl Future<Output = Result<(), ApiError>>;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
}

pub fn decode_identity(bytes: &[u8]) -> Result<UserIdentity, ApiError> {
    serde_json::from_slice::<IdentityPayload>(bytes)
        .map(UserIdentity::from)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, endpoints: Endpoints) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            endpoints,
        }
    }

    /// Same-origin backend of the page currently loaded in the browser.
    pub fn for_page(endpoints: Endpoints) -> Result<Self, ApiError> {
        Ok(Self::new(navigation::page_origin()?, endpoints))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        debug!("POST {path} -> {status}");
        match ApiError::from_status(status) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

impl Backend for HttpBackend {
    async fn alive(&self) -> Result<(), ApiError> {
        self.post(self.endpoints.alive, &EmptyBody {}).await?;
        Ok(())
    }

    async fn identity(&self) -> Result<UserIdentity, ApiError> {
        let response = self.post(self.endpoints.identity, &EmptyBody {}).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode_identity(&bytes)
    }

    async fn login(&self, input: &LoginFormInput) -> Result<(), ApiError> {
        self.post(self.endpoints.login, input).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post(self.endpoints.logout, &EmptyBody {}).await?;
        Ok(())
    }
}
