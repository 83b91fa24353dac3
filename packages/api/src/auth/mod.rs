//! Session plumbing for the identity service.
//!
//! Sessions are issued by the external identity provider that owns the login page;
//! this crate only reads the user id back out of the shared session store and
//! flushes the session on logout.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
