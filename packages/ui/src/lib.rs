//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod auth;
pub use auth::{
    activate, reload_page, sign_in, sign_out, use_load_state, IdentityError, IdentityService,
    LoadState, LoginButton, LogoutButton, ServerIdentity,
};

pub mod navigation;
pub use navigation::{compute_navigation, create_page_url, is_active, NavIcon, NavigationEntry, Page};

mod sidebar;
pub use sidebar::{NavGlyph, NavLink, ShellSidebar, APP_NAME};

#[cfg(test)]
mod testing;
