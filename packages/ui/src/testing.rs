//! Identity double shared by the controller and shell tests.

use std::cell::Cell;
use std::rc::Rc;

use api::UserInfo;

use crate::auth::{IdentityError, IdentityService};

/// Counts every call. Clones share their counters, so a test can keep one handle
/// while the shell owns another.
#[derive(Clone, Default)]
pub struct RecordingIdentity {
    pub user: Option<UserInfo>,
    pub fail_login: bool,
    pub fail_logout: bool,
    /// Fetches past this many never resolve.
    pub hang_after: Option<usize>,
    pub fetches: Rc<Cell<usize>>,
    pub logins: Rc<Cell<usize>>,
    pub logouts: Rc<Cell<usize>>,
}

impl RecordingIdentity {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            ..Default::default()
        }
    }
}

impl PartialEq for RecordingIdentity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fetches, &other.fetches)
    }
}

impl IdentityService for RecordingIdentity {
    async fn current_user(&self) -> Result<UserInfo, IdentityError> {
        self.fetches.set(self.fetches.get() + 1);
        if self.hang_after.is_some_and(|n| self.fetches.get() > n) {
            std::future::pending::<()>().await;
        }
        self.user
            .clone()
            .ok_or_else(|| IdentityError("no active session".to_string()))
    }

    async fn login(&self) -> Result<(), IdentityError> {
        self.logins.set(self.logins.get() + 1);
        if self.fail_login {
            return Err(IdentityError("login page unreachable".to_string()));
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), IdentityError> {
        self.logouts.set(self.logouts.get() + 1);
        if self.fail_logout {
            return Err(IdentityError("network down".to_string()));
        }
        Ok(())
    }
}

pub fn alice() -> UserInfo {
    UserInfo {
        id: "1".to_string(),
        email: "alice@example.org".to_string(),
        full_name: "Alice".to_string(),
        role: "admin".to_string(),
    }
}

pub fn bob() -> UserInfo {
    UserInfo {
        id: "2".to_string(),
        email: "bob@example.org".to_string(),
        full_name: "Bob".to_string(),
        role: "member".to_string(),
    }
}
