use api::UserInfo;
use dioxus::prelude::*;

use crate::auth::{LoadState, LoginButton, LogoutButton};
use crate::components::Skeleton;
use crate::icons::{FaBook, FaBookOpen, FaCodePullRequest, FaGaugeHigh, FaUser, FaUsers};
use crate::navigation::{compute_navigation, is_active, NavIcon, NavigationEntry};
use crate::Icon;

pub const APP_NAME: &str = "Lexicon";

/// Sidebar for a given load state.
///
/// Stateless: the caller owns the [`LoadState`] and decides what navigating, logging
/// in and logging out mean.
#[component]
pub fn ShellSidebar(
    state: LoadState,
    /// Path of the page currently displayed, e.g. "/books".
    current_path: String,
    /// Called with the destination path when a link is clicked.
    on_navigate: EventHandler<String>,
    on_login: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let links = compute_navigation(&state);
    let loading = matches!(state, LoadState::Loading);

    rsx! {
        aside {
            class: "shell-sidebar",

            div {
                class: "shell-brand",
                Icon { icon: FaBook, width: 32, height: 32, class: "shell-brand-icon" }
                h1 { class: "shell-brand-name", "{APP_NAME}" }
            }

            nav {
                class: "shell-nav",
                if loading {
                    NavPlaceholder {}
                } else {
                    for entry in links {
                        NavLink {
                            key: "{entry.title}",
                            entry,
                            active: is_active(&current_path, &entry.destination()),
                            on_navigate,
                        }
                    }
                }
            }

            div {
                class: "shell-footer",
                {match state {
                    LoadState::Loading => rsx! { UserSummaryPlaceholder {} },
                    LoadState::Authenticated(user) => rsx! { UserSummary { user, on_logout } },
                    LoadState::Unauthenticated => rsx! { LoginButton { onclick: on_login } },
                }}
            }
        }
    }
}

/// One sidebar link. Clicks are routed through `on_navigate` instead of a page load.
#[component]
pub fn NavLink(
    entry: NavigationEntry,
    active: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    let destination = entry.destination();
    let target = destination.clone();

    rsx! {
        a {
            href: "{destination}",
            class: if active { "nav-link nav-link--active" } else { "nav-link" },
            aria_current: if active { "page" } else { "false" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_navigate.call(target.clone());
            },
            NavGlyph { icon: entry.icon }
            span { class: "nav-link-title", "{entry.title}" }
        }
    }
}

#[component]
pub fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaGaugeHigh, width: 20, height: 20 } },
        NavIcon::Book => rsx! { Icon { icon: FaBook, width: 20, height: 20 } },
        NavIcon::PullRequest => rsx! { Icon { icon: FaCodePullRequest, width: 20, height: 20 } },
        NavIcon::Library => rsx! { Icon { icon: FaBookOpen, width: 20, height: 20 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
    }
}

#[component]
fn NavPlaceholder() -> Element {
    rsx! {
        div {
            class: "nav-placeholder",
            for _ in 0..3 {
                Skeleton { class: "skeleton--nav" }
            }
        }
    }
}

#[component]
fn UserSummaryPlaceholder() -> Element {
    rsx! {
        div {
            class: "user-summary",
            Skeleton { class: "skeleton--avatar" }
            div {
                class: "user-details",
                Skeleton { class: "skeleton--text skeleton--wide" }
                Skeleton { class: "skeleton--text skeleton--narrow" }
            }
        }
    }
}

#[component]
fn UserSummary(user: UserInfo, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "user-summary",
            div {
                class: "user-avatar",
                Icon { icon: FaUser, width: 24, height: 24 }
            }
            div {
                class: "user-details",
                p { class: "user-name", "{user.display_name()}" }
                p { class: "user-role", "{user.role_label()}" }
            }
        }
        LogoutButton { onclick: on_logout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: LoadState, current_path: &str) -> String {
        fn harness((state, current_path): (LoadState, String)) -> Element {
            rsx! {
                ShellSidebar {
                    state,
                    current_path,
                    on_navigate: move |_: String| {},
                    on_login: move |_: ()| {},
                    on_logout: move |_: ()| {},
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(harness, (state, current_path.to_string()));
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn signed_in(full_name: &str, role: &str) -> LoadState {
        LoadState::Authenticated(UserInfo {
            id: "1".to_string(),
            email: "reader@example.org".to_string(),
            full_name: full_name.to_string(),
            role: role.to_string(),
        })
    }

    fn link_count(html: &str) -> usize {
        html.matches("class=\"nav-link").count()
    }

    fn assert_in_order(html: &str, titles: &[&str]) {
        let positions: Vec<usize> = titles
            .iter()
            .map(|t| html.find(t).unwrap_or_else(|| panic!("{t} not rendered")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{titles:?} out of order");
    }

    #[test]
    fn test_loading_renders_placeholders_only() {
        let html = render(LoadState::Loading, "/dashboard");
        assert_eq!(html.matches("skeleton--nav").count(), 3);
        assert_eq!(html.matches("skeleton--avatar").count(), 1);
        assert_eq!(html.matches("skeleton--text").count(), 2);
        assert_eq!(link_count(&html), 0);
        assert!(!html.contains("Login"));
        assert!(!html.contains("Logout"));
        assert!(html.contains(APP_NAME));
    }

    #[test]
    fn test_admin_summary_and_links() {
        let html = render(signed_in("Alice", "admin"), "/dashboard");
        assert!(html.contains("Alice"));
        assert!(html.contains("Admin"));
        assert!(html.contains("Logout"));
        assert!(!html.contains("Login<"));
        assert!(!html.contains("skeleton"));
        assert_eq!(link_count(&html), 5);
        assert!(!html.contains("My Borrows"));
        assert_in_order(
            &html,
            &["Dashboard", "Browse Books", "Manage Books", "Borrow Requests", "Manage Members"],
        );
    }

    #[test]
    fn test_member_summary_and_links() {
        let html = render(signed_in("Bob", "member"), "/books");
        assert!(html.contains("Bob"));
        assert!(html.contains("Member"));
        assert!(html.contains("Logout"));
        assert_eq!(link_count(&html), 3);
        assert!(!html.contains("Manage Books"));
        assert_in_order(&html, &["Dashboard", "Browse Books", "My Borrows"]);
    }

    #[test]
    fn test_signed_out_shows_login_and_member_links() {
        let html = render(LoadState::Unauthenticated, "/dashboard");
        assert!(html.contains("Login"));
        assert!(!html.contains("Logout"));
        assert!(!html.contains("skeleton"));
        assert_eq!(link_count(&html), 3);
        assert_in_order(&html, &["Dashboard", "Browse Books", "My Borrows"]);
    }

    #[test]
    fn test_links_point_to_page_urls() {
        let html = render(signed_in("Alice", "admin"), "/dashboard");
        for href in ["/dashboard", "/books", "/adminbooks", "/adminrequests", "/adminmembers"] {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
    }

    #[test]
    fn test_only_exact_path_is_active() {
        let html = render(signed_in("Alice", "admin"), "/adminbooks");
        assert_eq!(html.matches("nav-link--active").count(), 1);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        let active = html.find("nav-link--active").unwrap();
        let manage_books = html.find("Manage Books").unwrap();
        let borrow_requests = html.find("Borrow Requests").unwrap();
        assert!(active < manage_books && manage_books < borrow_requests);

        let nested = render(signed_in("Alice", "admin"), "/adminbooks/42");
        assert_eq!(nested.matches("nav-link--active").count(), 0);
    }
}
