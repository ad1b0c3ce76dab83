//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by `App`. The header reads it
//! for the sign-in link, the marketplace gates "Book Now" on it, and the
//! whiteboard uses it to pick the author id for new shapes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the first session check completes.
    pub loading: bool,
}

impl AuthState {
    /// State before the session check has run.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Record the result of a session check.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Greeting shown in the header, `None` while signed out.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Hello, {}", u.name))
    }
}
