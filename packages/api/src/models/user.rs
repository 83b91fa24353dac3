//! # User model for library members and staff
//!
//! Defines the two representations of a Lexicon user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `full_name` — profile fields maintained by the identity provider.
//! - `role` — free-form permission tag. Only the exact value `"admin"` grants the
//!   administrative navigation; anything else is a regular member.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can cross the
//! server/client boundary via Dioxus server functions. It converts the `Uuid` to a
//! `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Role value that unlocks the administrative pages.
pub const ADMIN_ROLE: &str = "admin";

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl UserInfo {
    /// Whether this user sees the administrative navigation.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Get display name, falling back to email if the full name is blank.
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            &self.email
        } else {
            name
        }
    }

    /// Role as shown under the user's name: every word capitalised.
    pub fn role_label(&self) -> String {
        self.role
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}
