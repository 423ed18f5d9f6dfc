use std::cell::RefCell;

use shared::types::{LoginFormInput, UserIdentity};

use crate::{
    api::{ApiError, Backend},
    navigation::Navigator,
};

/// Backend with canned answers that records every call it receives.
pub struct MockBackend {
    pub alive: Result<(), ApiError>,
    pub identity: Result<UserIdentity, ApiError>,
    pub login: Result<(), ApiError>,
    pub logout: Result<(), ApiError>,
    pub calls: RefCell<Vec<&'static str>>,
    pub submitted: RefCell<Vec<LoginFormInput>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        let unscripted = ApiError::Transport("unscripted".to_owned());
        Self {
            alive: Err(unscripted.clone()),
            identity: Err(unscripted.clone()),
            login: Err(unscripted.clone()),
            logout: Err(unscripted),
            calls: RefCell::default(),
            submitted: RefCell::default(),
        }
    }
}

impl MockBackend {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl Backend for MockBackend {
    async fn alive(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("alive");
        self.alive.clone()
    }

    async fn identity(&self) -> Result<UserIdentity, ApiError> {
        self.calls.borrow_mut().push("identity");
        self.identity.clone()
    }

    async fn login(&self, input: &LoginFormInput) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("login");
        self.submitted.borrow_mut().push(input.clone());
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("logout");
        self.logout.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}
