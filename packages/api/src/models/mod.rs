//! Database models.

mod user;

#[cfg(feature = "server")]
pub use user::User;
pub use user::{UserInfo, ADMIN_ROLE};
