//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authoritative in-memory record of "who is logged in", consumed by
//! route guards and identity-aware chrome. The token and user fields are
//! always written and cleared together; their durable mirror lives in
//! `auth::store`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// In-memory session: bearer token, profile snapshot, and the startup
/// reconciliation flag.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Opaque bearer credential; absent means unauthenticated.
    pub token: Option<String>,
    /// Profile snapshot; may lag the backend, and may be absent even when
    /// a token is present (treated as unauthenticated for access control).
    pub user: Option<SessionUser>,
    /// True only while startup reconciliation is in flight.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // Reconciliation begins immediately at startup, so the session is
        // born loading; only the reconcile functions clear it.
        Self { token: None, user: None, loading: true }
    }
}

impl SessionState {
    /// Authentication is defined by token presence alone.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Set both authenticated fields together.
    pub fn set_authenticated(&mut self, token: String, user: SessionUser) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Clear both authenticated fields together.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}
