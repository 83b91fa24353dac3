//! # Sidebar navigation model
//!
//! The sidebar shows a fixed set of links, chosen by the signed-in user's role:
//!
//! | List | Entries |
//! |------|---------|
//! | [`COMMON_LINKS`] | Dashboard, Browse Books |
//! | [`MEMBER_LINKS`] | My Borrows |
//! | [`ADMIN_LINKS`] | Manage Books, Borrow Requests, Manage Members |
//!
//! [`compute_navigation`] always returns the common links first, followed by either the
//! admin or the member links. Visitors who are still loading or are signed out get the
//! member list.

use crate::auth::LoadState;

/// Map a logical page name to its path: `"MyBorrows"` → `"/myborrows"`.
pub fn create_page_url(name: &str) -> String {
    format!("/{}", name.to_lowercase().replace(' ', "-"))
}

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Books,
    MyBorrows,
    AdminBooks,
    AdminRequests,
    AdminMembers,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Books => "Books",
            Page::MyBorrows => "MyBorrows",
            Page::AdminBooks => "AdminBooks",
            Page::AdminRequests => "AdminRequests",
            Page::AdminMembers => "AdminMembers",
        }
    }

    pub fn url(self) -> String {
        create_page_url(self.name())
    }
}

/// Symbolic icon for a navigation entry. Rendered by [`crate::NavGlyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Book,
    PullRequest,
    Library,
    Users,
}

/// A single labeled link in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub page: Page,
    pub icon: NavIcon,
}

impl NavigationEntry {
    pub fn destination(&self) -> String {
        self.page.url()
    }
}

pub const COMMON_LINKS: &[NavigationEntry] = &[
    NavigationEntry {
        title: "Dashboard",
        page: Page::Dashboard,
        icon: NavIcon::Dashboard,
    },
    NavigationEntry {
        title: "Browse Books",
        page: Page::Books,
        icon: NavIcon::Book,
    },
];

pub const MEMBER_LINKS: &[NavigationEntry] = &[NavigationEntry {
    title: "My Borrows",
    page: Page::MyBorrows,
    icon: NavIcon::PullRequest,
}];

pub const ADMIN_LINKS: &[NavigationEntry] = &[
    NavigationEntry {
        title: "Manage Books",
        page: Page::AdminBooks,
        icon: NavIcon::Library,
    },
    NavigationEntry {
        title: "Borrow Requests",
        page: Page::AdminRequests,
        icon: NavIcon::PullRequest,
    },
    NavigationEntry {
        title: "Manage Members",
        page: Page::AdminMembers,
        icon: NavIcon::Users,
    },
];

/// Links to show for the given load state.
pub fn compute_navigation(state: &LoadState) -> Vec<NavigationEntry> {
    let role_links = match state {
        LoadState::Authenticated(user) if user.is_admin() => ADMIN_LINKS,
        _ => MEMBER_LINKS,
    };
    COMMON_LINKS.iter().chain(role_links).copied().collect()
}

/// A link is active only when the current path is exactly its destination.
pub fn is_active(current_path: &str, destination: &str) -> bool {
    current_path == destination
}
