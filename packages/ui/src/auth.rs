//! Identity state, the identity service seam, and the sign-in/sign-out controls.

use api::UserInfo;
use dioxus::prelude::*;

use crate::icons::{FaRightFromBracket, FaRightToBracket};
use crate::Icon;

/// What the shell knows about the visitor.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The identity fetch has not resolved yet.
    Loading,
    Authenticated(UserInfo),
    /// The fetch failed for any reason, including "not signed in".
    Unauthenticated,
}

impl LoadState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            LoadState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// The identity service could not tell who the visitor is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("identity unavailable: {0}")]
pub struct IdentityError(pub String);

/// Who is signed in, and how to sign in or out.
// Futures are polled on the UI's single-threaded executor; no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait IdentityService {
    async fn current_user(&self) -> Result<UserInfo, IdentityError>;

    /// Start signing in. Expected to navigate away from the app.
    async fn login(&self) -> Result<(), IdentityError>;

    async fn logout(&self) -> Result<(), IdentityError>;
}

/// [`IdentityService`] backed by the `api` server functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerIdentity;

impl IdentityService for ServerIdentity {
    async fn current_user(&self) -> Result<UserInfo, IdentityError> {
        api::get_current_user()
            .await
            .map_err(|e| IdentityError(e.to_string()))?
            .ok_or_else(|| IdentityError("no active session".to_string()))
    }

    async fn login(&self) -> Result<(), IdentityError> {
        let url = api::get_login_url()
            .await
            .map_err(|e| IdentityError(e.to_string()))?;
        open_login_page(&url)
    }

    async fn logout(&self) -> Result<(), IdentityError> {
        api::logout()
            .await
            .map_err(|e| IdentityError(e.to_string()))
    }
}

/// Send the browser to `url`. Fails where there is no window to navigate.
pub(crate) fn open_login_page(url: &str) -> Result<(), IdentityError> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| IdentityError("no window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| IdentityError(format!("{e:?}")))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(IdentityError(format!("no window to open {url}")))
    }
}

/// Resolve the initial load state. Failures are logged and read as signed out.
pub async fn activate<I: IdentityService>(identity: &I) -> LoadState {
    match identity.current_user().await {
        Ok(user) => LoadState::Authenticated(user),
        Err(e) => {
            tracing::error!("User not logged in: {}", e);
            LoadState::Unauthenticated
        }
    }
}

/// Hand the visitor to the login page.
pub async fn sign_in<I: IdentityService>(identity: &I) {
    if let Err(e) = identity.login().await {
        tracing::error!("Failed to start login: {}", e);
    }
}

/// End the session, then run `reload`. A failed logout leaves everything as is.
pub async fn sign_out<I, F>(identity: &I, reload: F)
where
    I: IdentityService,
    F: FnOnce(),
{
    match identity.logout().await {
        Ok(()) => reload(),
        Err(e) => tracing::error!("Failed to log out: {}", e),
    }
}

/// Reload the document. Returns `false` where there is no document to reload.
pub fn reload_page() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.location().reload().is_ok();
        }
    }
    false
}

/// Get the shell's load state.
/// Only available below an [`crate::views::AppShell`].
pub fn use_load_state() -> Signal<LoadState> {
    use_context::<Signal<LoadState>>()
}

/// Button shown to signed-out visitors.
#[component]
pub fn LoginButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "shell-button shell-button--login",
            onclick: move |_| onclick.call(()),
            Icon { icon: FaRightToBracket, width: 20, height: 20 }
            span { "Login" }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "shell-button shell-button--logout",
            onclick: move |_| onclick.call(()),
            Icon { icon: FaRightFromBracket, width: 20, height: 20 }
            span { "Logout" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{alice, RecordingIdentity};
    use std::cell::Cell;

    #[tokio::test]
    async fn test_activate_success() {
        let identity = RecordingIdentity::signed_in(alice());
        assert_eq!(activate(&identity).await, LoadState::Authenticated(alice()));
        assert_eq!(identity.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_activate_failure_is_signed_out() {
        let identity = RecordingIdentity::default();
        assert_eq!(activate(&identity).await, LoadState::Unauthenticated);
        assert_eq!(identity.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_calls_login_once() {
        let identity = RecordingIdentity::default();
        sign_in(&identity).await;
        assert_eq!(identity.logins.get(), 1);
        assert_eq!(identity.fetches.get(), 0);

        let failing = RecordingIdentity {
            fail_login: true,
            ..Default::default()
        };
        sign_in(&failing).await;
        assert_eq!(failing.logins.get(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_reloads_after_logout() {
        let identity = RecordingIdentity::signed_in(alice());
        let mut state = activate(&identity).await;
        let reloads = Cell::new(0);

        sign_out(&identity, || {
            assert_eq!(identity.logouts.get(), 1);
            reloads.set(reloads.get() + 1);
            state = LoadState::Loading;
        })
        .await;

        assert_eq!(identity.logouts.get(), 1);
        assert_eq!(reloads.get(), 1);
        assert_eq!(state, LoadState::Loading);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_state() {
        let identity = RecordingIdentity {
            user: Some(alice()),
            fail_logout: true,
            ..Default::default()
        };
        let mut state = activate(&identity).await;

        sign_out(&identity, || state = LoadState::Loading).await;

        assert_eq!(identity.logouts.get(), 1);
        assert_eq!(state, LoadState::Authenticated(alice()));
    }

    #[test]
    fn test_load_state_user() {
        assert_eq!(LoadState::Authenticated(alice()).user(), Some(&alice()));
        assert_eq!(LoadState::Loading.user(), None);
        assert_eq!(LoadState::Unauthenticated.user(), None);
    }

    #[test]
    fn test_login_page_needs_a_window() {
        let err = open_login_page("/auth/login").unwrap_err();
        assert!(err.0.contains("no window"), "{err}");
    }
}
