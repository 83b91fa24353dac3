use dioxus::prelude::*;

use ui::views::AppShell;
use ui::ServerIdentity;

use crate::Route;

/// Routed wrapper around [`AppShell`]: feeds it the current path and turns link clicks
/// into router navigation.
#[component]
pub fn ShellLayout() -> Element {
    let nav = use_navigator();
    let current_path = use_route::<Route>().to_string();

    let on_navigate = move |path: String| {
        let Ok(route) = path.parse::<Route>() else {
            tracing::warn!("No route for {}", path);
            return;
        };
        nav.push(route);
    };

    rsx! {
        AppShell {
            identity: ServerIdentity,
            current_path,
            on_navigate,
            Outlet::<Route> {}
        }
    }
}
