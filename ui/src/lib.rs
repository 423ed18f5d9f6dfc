//! Dioxus components of the session gate.

mod authenticated_view;
mod backend;
mod loading;
mod login_view;
mod notification;
mod session_probe;

pub use authenticated_view::{AuthenticatedView, UserInfoBar};
pub use backend::use_backend;
pub use loading::LoadingIndicator;
pub use login_view::LoginView;
pub use notification::ErrorNotification;
pub use session_probe::SessionProbe;
