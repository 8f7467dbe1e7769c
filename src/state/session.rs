//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` provided from `App` is the sole owner of the
//! "current user" value; pages and components read snapshots via `get()` and
//! mutate only through the transitions below, driven by the login and logout
//! flows. The route guard deliberately does NOT read this state — it re-reads
//! the token slot instead — so a stale profile here can never grant access.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserInfo;
use crate::util::claims::Claims;

/// Whether a decodable credential existed at the last recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Anonymous,
    Authenticated,
}

/// Derived session value: status, token claims, and the richer profile
/// fetched from the API after login.
///
/// `user_info = None` is the canonical logged-out profile value. The profile
/// is refreshed only by explicit fetches, never kept in sync with claims
/// automatically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub claims: Option<Claims>,
    pub user_info: Option<UserInfo>,
    pub loading: bool,
}

impl SessionState {
    /// Transition into the authenticated state after a successful login.
    ///
    /// `user_info` may be `None` when the post-login profile fetch failed;
    /// the session stays authenticated via claims alone and the profile
    /// remains empty until the next successful fetch.
    pub fn apply_login(&mut self, claims: Claims, user_info: Option<UserInfo>) {
        self.status = SessionStatus::Authenticated;
        self.claims = Some(claims);
        self.user_info = user_info;
        self.loading = false;
    }

    /// Replace the profile half only. `None` resets it to logged-out-empty.
    pub fn set_user_info(&mut self, user_info: Option<UserInfo>) {
        self.user_info = user_info;
    }

    /// Flip the loading flag around network suspension points.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Transition back to Anonymous. Must be issued together with clearing
    /// the token slot; idempotent from any starting state.
    pub fn apply_logout(&mut self) {
        *self = Self::default();
    }

    /// Whether the last recomputation saw an admin credential.
    pub fn is_admin(&self) -> bool {
        self.claims.as_ref().is_some_and(|c| c.is_admin)
    }

    /// Subject id from the claims, if authenticated.
    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.user_id.as_str())
    }
}
