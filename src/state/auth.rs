//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the session layer (`App` and the session refresher). The route gate
//! only reads whether a session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays true until the first session check resolves.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the initial `/auth/me` call returns.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record the outcome of a session check.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}
