//! Pages behind the sidebar links. Their content is owned by other parts of the
//! application; here they only announce themselves.

use dioxus::prelude::*;

use ui::views::PagePlaceholder;
use ui::{use_load_state, LoadState};

#[component]
pub fn Dashboard() -> Element {
    let state = use_load_state();
    let description = match &*state.read() {
        LoadState::Authenticated(user) => format!("Welcome back, {}.", user.display_name()),
        LoadState::Loading => "Loading your library...".to_string(),
        LoadState::Unauthenticated => "Sign in to borrow books.".to_string(),
    };

    rsx! {
        PagePlaceholder { title: "Dashboard", description }
    }
}

#[component]
pub fn Books() -> Element {
    rsx! {
        PagePlaceholder { title: "Browse Books", description: "Search the catalogue and request a loan." }
    }
}

#[component]
pub fn MyBorrows() -> Element {
    rsx! {
        PagePlaceholder { title: "My Borrows", description: "Books you have borrowed or requested." }
    }
}

#[component]
pub fn AdminBooks() -> Element {
    rsx! {
        PagePlaceholder { title: "Manage Books", description: "Add, edit and retire catalogue entries." }
    }
}

#[component]
pub fn AdminRequests() -> Element {
    rsx! {
        PagePlaceholder { title: "Borrow Requests", description: "Approve or decline pending loans." }
    }
}

#[component]
pub fn AdminMembers() -> Element {
    rsx! {
        PagePlaceholder { title: "Manage Members", description: "Review library members and their roles." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let description = format!("Nothing lives at /{}.", segments.join("/"));
    rsx! {
        PagePlaceholder { title: "Page not found", description }
    }
}
