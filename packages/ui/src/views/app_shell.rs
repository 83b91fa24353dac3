use dioxus::prelude::*;

use crate::auth::{activate, reload_page, sign_in, sign_out, IdentityService, LoadState};
use crate::sidebar::ShellSidebar;

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Load state plus the sign-in and sign-out actions, as returned by [`use_shell`].
#[derive(Clone, Copy)]
pub struct ShellControls {
    pub state: Signal<LoadState>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

/// Fetch the signed-in user once and provide the [`LoadState`] signal as context.
///
/// `logout` resets the state to `Loading` and reloads the page once the identity
/// service has ended the session. Without a document to reload, the fetch runs again
/// in place.
pub fn use_shell<I: IdentityService + Clone + 'static>(identity: I) -> ShellControls {
    let mut state = use_signal(|| LoadState::Loading);
    use_context_provider(|| state);

    let fetch_identity = identity.clone();
    let mut fetch = use_resource(move || {
        let identity = fetch_identity.clone();
        async move {
            let loaded = activate(&identity).await;
            state.set(loaded);
        }
    });

    let login_identity = identity.clone();
    let login = use_callback(move |_: ()| {
        let identity = login_identity.clone();
        spawn(async move {
            sign_in(&identity).await;
        });
    });

    let logout = use_callback(move |_: ()| {
        let identity = identity.clone();
        spawn(async move {
            sign_out(&identity, move || {
                state.set(LoadState::Loading);
                if !reload_page() {
                    fetch.restart();
                }
            })
            .await;
        });
    });

    ShellControls {
        state,
        login,
        logout,
    }
}

/// Application chrome: the sidebar plus a scrollable main area for `children`.
///
/// Platform packages provide the identity service, the current path, a navigation
/// callback and an `Outlet` as children. The resulting [`LoadState`] signal is
/// available below the shell through [`crate::use_load_state`].
#[component]
pub fn AppShell<I: IdentityService + Clone + PartialEq + 'static>(
    /// Where the signed-in user comes from, e.g. [`crate::ServerIdentity`].
    identity: I,
    /// Path of the page currently displayed, e.g. "/books".
    current_path: String,
    /// Called with the destination path when a sidebar link is clicked.
    on_navigate: EventHandler<String>,
    /// The router outlet for child routes.
    children: Element,
) -> Element {
    let shell = use_shell(identity);

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: "shell",
            ShellSidebar {
                state: shell.state.cloned(),
                current_path,
                on_navigate,
                on_login: shell.login,
                on_logout: shell.logout,
            }
            main {
                class: "shell-main",
                div {
                    class: "shell-content",
                    {children}
                }
            }
        }
    }
}
