//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself is owned by an external provider; this state only
//! tracks what that provider reported so identity-dependent rendering and
//! the collection loader can react to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// True once the identity fetch has settled with no user.
    pub fn signed_out(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
