use super::*;
use crate::auth::store::{MemoryStore, TOKEN_KEY, USER_KEY};
use crate::net::http::network_error;
use crate::net::types::AuthProvider;
use std::collections::HashMap;

fn sample_auth() -> AuthResponse {
    AuthResponse {
        token: "jwt-token".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        provider: AuthProvider::Local,
        roles: vec!["ROLE_USER".to_owned()],
    }
}

fn sample_profile() -> UserProfile {
    UserProfile {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        provider: AuthProvider::Local,
        roles: vec!["ROLE_USER".to_owned()],
    }
}

fn bad_credentials() -> ApiError {
    ApiError {
        message: "Invalid username or password".to_owned(),
        status: 400,
        path: Some("/api/auth/login".to_owned()),
        field_errors: None,
    }
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_persists_and_authenticates() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let outcome = complete_login(&store, &mut session, Ok(sample_auth()));

    assert!(outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Dashboard));
    assert_eq!(outcome.notice, Some((NoticeKind::Success, "Login successful!".to_owned())));
    assert!(session.is_authenticated());
    assert_eq!(session.user.as_ref().unwrap().username, "alice");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-token"));
    assert!(store.get(USER_KEY).is_some());
}

#[test]
fn login_failure_surfaces_server_message_and_stays_put() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let outcome = complete_login(&store, &mut session, Err(bad_credentials()));

    assert!(!outcome.ok);
    assert_eq!(outcome.navigate, None);
    assert_eq!(
        outcome.notice,
        Some((NoticeKind::Error, "Invalid username or password".to_owned()))
    );
    assert!(!session.is_authenticated());
    assert_eq!(store.len(), 0);
}

#[test]
fn failed_login_leaves_existing_session_unchanged() {
    // An already-authenticated session double-submitting a login that
    // fails keeps its existing credential pair.
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    complete_login(&store, &mut session, Ok(sample_auth()));
    let before_token = store.get(TOKEN_KEY);

    let outcome = complete_login(&store, &mut session, Err(bad_credentials()));
    assert!(!outcome.ok);
    assert!(session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), before_token);
}

#[test]
fn login_failure_with_empty_message_uses_fallback() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let err = ApiError { message: String::new(), status: 500, path: None, field_errors: None };
    let outcome = complete_login(&store, &mut session, Err(err));
    assert_eq!(outcome.notice, Some((NoticeKind::Error, "Login failed".to_owned())));
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_success_matches_login_contract() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let outcome = complete_signup(&store, &mut session, Ok(sample_auth()));

    assert!(outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Dashboard));
    assert_eq!(outcome.notice, Some((NoticeKind::Success, "Signup successful!".to_owned())));
    assert!(session.is_authenticated());
}

#[test]
fn signup_failure_reports_without_navigation() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let err = ApiError {
        message: "Username is already taken".to_owned(),
        status: 400,
        path: None,
        field_errors: None,
    };
    let outcome = complete_signup(&store, &mut session, Err(err));
    assert!(!outcome.ok);
    assert_eq!(outcome.navigate, None);
    assert_eq!(store.len(), 0);
}

// =============================================================
// OAuth2 callback
// =============================================================

#[test]
fn oauth_callback_success_authenticates_with_derived_role() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let outcome = complete_oauth_callback(
        &store,
        &mut session,
        lookup(&[("token", "t"), ("username", "u"), ("email", "e"), ("provider", "GOOGLE")]),
    );

    assert!(outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Dashboard));
    let user = session.user.as_ref().unwrap();
    assert_eq!(user.provider, AuthProvider::Google);
    assert_eq!(user.roles, vec!["ROLE_USER".to_owned()]);
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t"));
}

#[test]
fn oauth_callback_without_token_navigates_to_login_and_writes_nothing() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    let outcome = complete_oauth_callback(&store, &mut session, lookup(&[("username", "u")]));

    assert!(!outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Login));
    assert_eq!(
        outcome.notice,
        Some((NoticeKind::Error, "No token received from OAuth2 provider".to_owned()))
    );
    assert!(!session.is_authenticated());
    assert_eq!(store.len(), 0);
}

// =============================================================
// logout
// =============================================================

#[test]
fn login_then_logout_leaves_store_empty_and_session_anonymous() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    complete_login(&store, &mut session, Ok(sample_auth()));

    let outcome = complete_logout(&store, &mut session, Ok(()));
    assert!(outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Home));
    assert_eq!(outcome.notice, Some((NoticeKind::Success, "Logged out successfully".to_owned())));
    assert!(!session.is_authenticated());
    assert!(session.user.is_none());
    assert_eq!(store.len(), 0);
}

#[test]
fn logout_clears_locally_even_when_backend_call_fails() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    complete_login(&store, &mut session, Ok(sample_auth()));

    let outcome = complete_logout(&store, &mut session, Err(network_error()));
    assert!(outcome.ok);
    assert_eq!(outcome.navigate, Some(Route::Home));
    assert_eq!(outcome.notice, None);
    assert!(!session.is_authenticated());
    assert_eq!(store.len(), 0);
}

// =============================================================
// startup reconciliation
// =============================================================

#[test]
fn reconcile_with_empty_store_is_anonymous_without_probe() {
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    assert!(!begin_reconcile(&store, &mut session));
    assert!(!session.is_authenticated());
    assert!(!session.loading);
}

#[test]
fn reconcile_adopts_persisted_pair_optimistically() {
    let store = MemoryStore::default();
    let mut seeded = SessionState::default();
    complete_login(&store, &mut seeded, Ok(sample_auth()));

    let mut session = SessionState::default();
    assert!(begin_reconcile(&store, &mut session));
    assert!(session.is_authenticated());
    assert!(session.loading);

    finish_reconcile(&store, &mut session, Ok(sample_profile()));
    assert!(session.is_authenticated());
    // Local profile copy stands; the probe does not overwrite it.
    assert_eq!(session.user.as_ref().unwrap().username, "alice");
    assert!(!session.loading);
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-token"));
}

#[test]
fn reconcile_probe_failure_clears_store_and_session() {
    let store = MemoryStore::default();
    let mut seeded = SessionState::default();
    complete_login(&store, &mut seeded, Ok(sample_auth()));

    let mut session = SessionState::default();
    assert!(begin_reconcile(&store, &mut session));

    let err = ApiError { message: "Unauthorized".to_owned(), status: 401, path: None, field_errors: None };
    finish_reconcile(&store, &mut session, Err(err));
    assert!(!session.is_authenticated());
    assert!(session.user.is_none());
    assert!(!session.loading);
    assert_eq!(store.len(), 0);
}

#[test]
fn reconcile_loading_ends_false_in_all_cases() {
    // Empty store.
    let store = MemoryStore::default();
    let mut session = SessionState::default();
    begin_reconcile(&store, &mut session);
    assert!(!session.loading);

    // Probe success.
    let mut seeded = SessionState::default();
    complete_login(&store, &mut seeded, Ok(sample_auth()));
    let mut session = SessionState::default();
    begin_reconcile(&store, &mut session);
    finish_reconcile(&store, &mut session, Ok(sample_profile()));
    assert!(!session.loading);

    // Probe failure.
    let mut seeded = SessionState::default();
    complete_login(&store, &mut seeded, Ok(sample_auth()));
    let mut session = SessionState::default();
    begin_reconcile(&store, &mut session);
    finish_reconcile(&store, &mut session, Err(network_error()));
    assert!(!session.loading);
}

// =============================================================
// Route paths
// =============================================================

#[test]
fn route_paths_are_absolute() {
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
}
