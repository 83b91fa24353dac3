//! Session keys shared with the identity provider.

/// Key under which the signed-in user's id is stored in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
