use shared::{config::Routes, types::LoginFormInput};
use tracing::{info, warn};

use crate::{
    api::{ApiError, Backend},
    navigation::Navigator,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    ErrorShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    NavigateToRoot,
    ShowError,
    Unhandled,
}

pub fn classify(result: &Result<(), ApiError>) -> LoginOutcome {
    match result {
        Ok(()) => LoginOutcome::NavigateToRoot,
        Err(ApiError::Unauthorized) => LoginOutcome::ShowError,
        Err(_) => LoginOutcome::Unhandled,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginForm {
    phase: LoginPhase,
}

impl LoginForm {
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// `false` while a previous submission is still outstanding.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = LoginPhase::Submitting;
        true
    }

    pub fn finish(&mut self, outcome: LoginOutcome) {
        self.phase = match outcome {
            // The document is about to be replaced.
            LoginOutcome::NavigateToRoot => LoginPhase::Submitting,
            LoginOutcome::ShowError => LoginPhase::ErrorShown,
            LoginOutcome::Unhandled => LoginPhase::Idle,
        };
    }

    pub fn error_dismissed(&mut self) {
        if self.phase == LoginPhase::ErrorShown {
            self.phase = LoginPhase::Idle;
        }
    }
}

/// Posts the snapshot and navigates on success. The caller shows the error
/// banner when the outcome asks for it.
pub async fn submit(
    backend: &impl Backend,
    navigator: &impl Navigator,
    routes: &Routes,
    input: &LoginFormInput,
) -> LoginOutcome {
    info!("Submitting login for '{}'", input.username);
    let result = backend.login(input).await;
    let outcome = classify(&result);
    match &result {
        Ok(()) => {
            info!("Login accepted, redirecting to {}", routes.root);
            navigator.replace(routes.root);
        }
        Err(ApiError::Unauthorized) => info!("Login rejected"),
        Err(err) => warn!("Login request failed: {err}"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use shared::config::DEFAULT_CONFIG;

    use super::*;
    use crate::{
        notification::{CloseReason, NotificationState},
        testing::{MockBackend, RecordingNavigator},
    };

    fn credentials(username: &str, password: &str) -> LoginFormInput {
        LoginFormInput {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[tokio::test]
    async fn accepted_login_goes_to_root() {
        let backend = MockBackend {
            login: Ok(()),
            ..Default::default()
        };
        let navigator = RecordingNavigator::default();
        let input = credentials("admin", "secret");

        let outcome = submit(&backend, &navigator, &DEFAULT_CONFIG.routes, &input).await;

        assert_eq!(outcome, LoginOutcome::NavigateToRoot);
        assert_eq!(navigator.visited(), ["/"]);
        assert_eq!(*backend.submitted.borrow(), [input]);
    }

    #[tokio::test]
    async fn rejected_login_stays_and_shows_banner() {
        let backend = MockBackend {
            login: Err(ApiError::Unauthorized),
            ..Default::default()
        };
        let navigator = RecordingNavigator::default();
        let mut form = LoginForm::default();
        let mut notification = NotificationState::default();

        assert!(form.begin_submit());
        let outcome = submit(
            &backend,
            &navigator,
            &DEFAULT_CONFIG.routes,
            &credentials("admin", "wrong"),
        )
        .await;
        form.finish(outcome);
        if outcome == LoginOutcome::ShowError {
            notification.show();
        }

        assert!(navigator.visited().is_empty());
        assert_eq!(form.phase(), LoginPhase::ErrorShown);
        assert!(notification.is_visible());
        assert_eq!(DEFAULT_CONFIG.texts.login_failed, "登录失败");
    }

    #[tokio::test]
    async fn other_errors_are_left_alone() {
        let backend = MockBackend {
            login: Err(ApiError::Status(500)),
            ..Default::default()
        };
        let navigator = RecordingNavigator::default();
        let mut form = LoginForm::default();

        assert!(form.begin_submit());
        let outcome = submit(
            &backend,
            &navigator,
            &DEFAULT_CONFIG.routes,
            &credentials("admin", "secret"),
        )
        .await;
        form.finish(outcome);

        assert_eq!(outcome, LoginOutcome::Unhandled);
        assert_eq!(form.phase(), LoginPhase::Idle);
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn empty_fields_are_submitted_as_is() {
        let backend = MockBackend {
            login: Err(ApiError::Unauthorized),
            ..Default::default()
        };
        let navigator = RecordingNavigator::default();

        submit(&backend, &navigator, &DEFAULT_CONFIG.routes, &credentials("", "")).await;

        assert_eq!(*backend.submitted.borrow(), [credentials("", "")]);
    }

    #[test]
    fn only_one_submission_at_a_time() {
        let mut form = LoginForm::default();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        form.finish(LoginOutcome::ShowError);
        assert!(form.begin_submit());
    }

    #[test]
    fn dismissing_the_banner_returns_to_idle() {
        let mut form = LoginForm::default();
        let mut notification = NotificationState::default();
        form.begin_submit();
        form.finish(LoginOutcome::ShowError);
        notification.show();

        if notification.close(CloseReason::Clickaway) {
            form.error_dismissed();
        }
        assert_eq!(form.phase(), LoginPhase::ErrorShown);

        if notification.close(CloseReason::CloseButton) {
            form.error_dismissed();
        }
        assert_eq!(form.phase(), LoginPhase::Idle);
    }
}
