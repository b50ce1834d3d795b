//! The session state machine.
//!
//! ARCHITECTURE
//! ============
//! Every operation is a pure completion function: it consumes an
//! already-resolved network result (or, for the OAuth2 callback, the
//! redirect parameters), applies the storage and in-memory transitions
//! atomically from the caller's point of view, and returns its user-facing
//! effects — notice and navigation — as data. Pages run the network call,
//! hand the result here, and interpret the [`AuthOutcome`]. This keeps the
//! session logic testable without a browser.
//!
//! States: Uninitialized -> Reconciling -> {Authenticated, Anonymous},
//! plus Authenticated -> Anonymous on logout or external invalidation
//! (the 401 teardown in `net::http`).

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::auth::oauth;
use crate::auth::store::{SessionStore, clear_session, load_session, persist_session};
use crate::net::http::ApiError;
use crate::net::types::{AuthResponse, SessionUser, UserProfile};
use crate::state::notices::NoticeKind;
use crate::state::session::SessionState;

/// Navigation target requested by a session operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// The user-facing effects of a session operation. Callers never need
/// exception handling; failure is reported here, not thrown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthOutcome {
    pub ok: bool,
    pub notice: Option<(NoticeKind, String)>,
    pub navigate: Option<Route>,
}

/// Persist and adopt a fresh credential pair, in that order.
fn establish(
    store: &impl SessionStore,
    session: &mut SessionState,
    token: String,
    user: SessionUser,
    success_message: &str,
) -> AuthOutcome {
    persist_session(store, &token, &user);
    session.set_authenticated(token, user);
    AuthOutcome {
        ok: true,
        notice: Some((NoticeKind::Success, success_message.to_owned())),
        navigate: Some(Route::Dashboard),
    }
}

/// Report a failure without touching session state. No partial credential
/// is ever stored.
fn failure(err: &ApiError, fallback: &str, navigate: Option<Route>) -> AuthOutcome {
    let message = if err.message.is_empty() { fallback.to_owned() } else { err.message.clone() };
    AuthOutcome {
        ok: false,
        notice: Some((NoticeKind::Error, message)),
        navigate,
    }
}

/// Apply the result of `POST /auth/login`.
pub fn complete_login(
    store: &impl SessionStore,
    session: &mut SessionState,
    result: Result<AuthResponse, ApiError>,
) -> AuthOutcome {
    match result {
        Ok(auth) => {
            let user = SessionUser::from(&auth);
            establish(store, session, auth.token, user, "Login successful!")
        }
        Err(err) => failure(&err, "Login failed", None),
    }
}

/// Apply the result of `POST /auth/signup`. Same contract as login.
pub fn complete_signup(
    store: &impl SessionStore,
    session: &mut SessionState,
    result: Result<AuthResponse, ApiError>,
) -> AuthOutcome {
    match result {
        Ok(auth) => {
            let user = SessionUser::from(&auth);
            establish(store, session, auth.token, user, "Signup successful!")
        }
        Err(err) => failure(&err, "Signup failed", None),
    }
}

/// Apply an OAuth2 provider redirect. Unlike login/signup, failure
/// navigates to the login view instead of staying put.
pub fn complete_oauth_callback<F>(
    store: &impl SessionStore,
    session: &mut SessionState,
    param: F,
) -> AuthOutcome
where
    F: Fn(&str) -> Option<String>,
{
    match oauth::extract_callback_payload(param) {
        Ok(payload) => establish(store, session, payload.token, payload.user, "Authentication successful!"),
        Err(err) => AuthOutcome {
            ok: false,
            notice: Some((NoticeKind::Error, err.to_string())),
            navigate: Some(Route::Login),
        },
    }
}

/// Apply the result of `POST /auth/logout`. Failure-tolerant: local
/// teardown and Home navigation happen whether or not the backend call
/// succeeded; only the success notice depends on it.
pub fn complete_logout(
    store: &impl SessionStore,
    session: &mut SessionState,
    result: Result<(), ApiError>,
) -> AuthOutcome {
    clear_session(store);
    session.clear();
    let notice = result
        .is_ok()
        .then(|| (NoticeKind::Success, "Logged out successfully".to_owned()));
    AuthOutcome { ok: true, notice, navigate: Some(Route::Home) }
}

/// First half of startup reconciliation: adopt the persisted pair
/// optimistically. Returns whether a `/auth/me` probe is needed; when it
/// returns false the session is already Anonymous and loading is done.
pub fn begin_reconcile(store: &impl SessionStore, session: &mut SessionState) -> bool {
    match load_session(store) {
        Some((token, user)) => {
            session.set_authenticated(token, user);
            session.loading = true;
            true
        }
        None => {
            session.loading = false;
            false
        }
    }
}

/// Second half of startup reconciliation: consume the probe result.
///
/// A failed probe means the persisted token is no longer valid, so both
/// the store and the in-memory session are cleared. A successful probe
/// leaves the local profile copy standing. The loading flag is cleared
/// here exactly once, in every case.
pub fn finish_reconcile(
    store: &impl SessionStore,
    session: &mut SessionState,
    probe: Result<UserProfile, ApiError>,
) {
    if probe.is_err() {
        clear_session(store);
        session.clear();
    }
    session.loading = false;
}
